use adw::prelude::*;
use gtk4 as gtk;

use caremarket::api::models::WorkerProfile;

use crate::ui::drawer_view::DrawerHandle;

/// Cards for everyone who applied to the employer's postings.
pub fn candidate_board(candidates: &[WorkerProfile], drawer: &DrawerHandle) -> gtk::Widget {
    let root = gtk::Box::new(gtk::Orientation::Vertical, 12);
    root.set_margin_top(12);
    root.set_margin_bottom(12);
    root.set_margin_start(12);
    root.set_margin_end(12);

    let title = gtk::Label::new(Some("Candidates"));
    title.add_css_class("title-2");
    title.set_halign(gtk::Align::Start);
    root.append(&title);

    let flow = gtk::FlowBox::builder()
        .selection_mode(gtk::SelectionMode::None)
        .homogeneous(true)
        .max_children_per_line(3)
        .column_spacing(12)
        .row_spacing(12)
        .valign(gtk::Align::Start)
        .build();
    if candidates.is_empty() {
        let empty = gtk::Label::new(Some("No applications yet."));
        empty.add_css_class("dim-label");
        root.append(&empty);
    }
    for worker in candidates {
        flow.insert(&candidate_card(worker, drawer), -1);
    }

    let scroller = gtk::ScrolledWindow::builder()
        .vexpand(true)
        .hexpand(true)
        .child(&flow)
        .build();
    root.append(&scroller);
    root.upcast()
}

fn candidate_card(worker: &WorkerProfile, drawer: &DrawerHandle) -> gtk::Box {
    let card = gtk::Box::new(gtk::Orientation::Vertical, 6);
    card.add_css_class("card");

    let avatar = adw::Avatar::new(64, Some(&worker.name), true);
    avatar.set_margin_top(12);
    card.append(&avatar);

    let name = gtk::Label::new(Some(&worker.name));
    name.add_css_class("heading");
    card.append(&name);

    let role = gtk::Label::new(Some(worker.role.label()));
    role.add_css_class("caption");
    card.append(&role);

    let applied = gtk::Label::new(Some(&format!("Applied for {}", worker.applied_for)));
    applied.add_css_class("dim-label");
    applied.set_wrap(true);
    applied.set_justify(gtk::Justification::Center);
    applied.set_margin_start(8);
    applied.set_margin_end(8);
    card.append(&applied);

    let message_btn = gtk::Button::with_label("Message");
    message_btn.add_css_class("pill");
    message_btn.set_halign(gtk::Align::Center);
    message_btn.set_margin_bottom(12);
    {
        let drawer = drawer.clone();
        let worker = worker.clone();
        message_btn.connect_clicked(move |_| {
            if !drawer.open_by_worker_id(&worker.worker_id) {
                drawer.open_fresh_conversation(&worker, &worker.applied_for);
            }
        });
    }
    card.append(&message_btn);
    card
}
