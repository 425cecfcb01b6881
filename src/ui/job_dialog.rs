use std::time::Duration;

use adw::prelude::*;
use gtk4 as gtk;

use caremarket::api::models::Role;
use caremarket::jobs::{self, EmploymentType, JobPostingDraft, PostedJob};

const ROLES: [Option<Role>; 3] = [None, Some(Role::Rbt), Some(Role::Bcba)];

pub fn show_job_dialog(parent: &adw::ApplicationWindow, overlay: &adw::ToastOverlay, submit_delay: Duration) {
    let dialog = gtk::Dialog::builder()
        .title("Post a Job")
        .transient_for(parent)
        .modal(true)
        .default_width(460)
        .build();

    let content = gtk::Box::new(gtk::Orientation::Vertical, 8);
    content.set_margin_top(12);
    content.set_margin_bottom(12);
    content.set_margin_start(12);
    content.set_margin_end(12);

    let title_entry = gtk::Entry::new();
    title_entry.set_placeholder_text(Some("Job title"));
    content.append(&title_entry);

    let role_labels: Vec<&str> = ROLES.iter().map(|r| r.map_or("Choose a role", Role::label)).collect();
    let role_dropdown = gtk::DropDown::from_strings(&role_labels);
    content.append(&role_dropdown);

    let type_labels: Vec<&str> = EmploymentType::ALL.iter().map(|t| t.label()).collect();
    let type_dropdown = gtk::DropDown::from_strings(&type_labels);
    content.append(&type_dropdown);

    let location_entry = gtk::Entry::new();
    location_entry.set_placeholder_text(Some("Location"));
    content.append(&location_entry);

    let pay_entry = gtk::Entry::new();
    pay_entry.set_placeholder_text(Some("Pay range (optional)"));
    content.append(&pay_entry);

    let description = gtk::TextView::new();
    description.set_wrap_mode(gtk::WrapMode::WordChar);
    let description_scroller = gtk::ScrolledWindow::builder()
        .min_content_height(120)
        .child(&description)
        .build();
    description_scroller.add_css_class("card");
    content.append(&description_scroller);

    let status = gtk::Label::new(None);
    status.add_css_class("dim-label");
    status.set_halign(gtk::Align::Start);
    content.append(&status);

    dialog.set_child(Some(&content));
    let _ = dialog.add_button("Cancel", gtk::ResponseType::Cancel);
    let post_btn = dialog.add_button("Post", gtk::ResponseType::Ok);
    post_btn.add_css_class("suggested-action");
    dialog.set_default_response(gtk::ResponseType::Ok);

    let overlay = overlay.clone();
    dialog.connect_response(move |dlg, resp| {
        if resp != gtk::ResponseType::Ok {
            dlg.close();
            return;
        }

        let buffer = description.buffer();
        let draft = JobPostingDraft {
            title: title_entry.text().to_string(),
            role: ROLES.get(role_dropdown.selected() as usize).copied().flatten(),
            employment_type: EmploymentType::ALL
                .get(type_dropdown.selected() as usize)
                .copied()
                .unwrap_or_default(),
            location: location_entry.text().to_string(),
            pay_range: pay_entry.text().to_string(),
            description: buffer.text(&buffer.start_iter(), &buffer.end_iter(), false).to_string(),
        };
        let posting = match draft.validate() {
            Ok(posting) => posting,
            Err(e) => {
                overlay.add_toast(adw::Toast::new(&e.to_string()));
                return;
            }
        };

        status.set_label("Posting…");
        post_btn.set_sensitive(false);

        let rx: glib::Receiver<PostedJob> = crate::utils::run_async_to_main(jobs::submit(posting, submit_delay));
        let overlay = overlay.clone();
        let dlg = dlg.clone();
        rx.attach(None, move |posted| {
            overlay.add_toast(adw::Toast::new(&format!("Posted \"{}\"", posted.posting.title)));
            dlg.close();
            glib::ControlFlow::Break
        });
    });

    dialog.present();
}
