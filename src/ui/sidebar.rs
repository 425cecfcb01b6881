use std::cell::RefCell;
use std::rc::Rc;

use adw::prelude::*;
use gtk4 as gtk;

use caremarket::api::models::MessageListItem;

use crate::ui::drawer_view::DrawerHandle;

pub struct Sidebar {
    root: gtk::Box,
    list: gtk::ListBox,
    items: Rc<RefCell<Vec<MessageListItem>>>,
}

impl Sidebar {
    pub fn new(drawer: DrawerHandle) -> Self {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 6);
        root.set_width_request(300);
        root.set_margin_top(8);
        root.set_margin_bottom(8);
        root.set_margin_start(8);
        root.set_margin_end(8);

        let title = gtk::Label::new(Some("Messages"));
        title.add_css_class("heading");
        title.set_halign(gtk::Align::Start);
        root.append(&title);

        let list = gtk::ListBox::new();
        list.add_css_class("navigation-sidebar");
        let scroller = gtk::ScrolledWindow::builder()
            .vexpand(true)
            .hscrollbar_policy(gtk::PolicyType::Never)
            .child(&list)
            .build();
        root.append(&scroller);

        let items: Rc<RefCell<Vec<MessageListItem>>> = Rc::default();
        {
            let list = list.downgrade();
            let items = items.clone();
            drawer.connect_selection_changed(move |state| {
                let Some(list) = list.upgrade() else { return };
                let row = state
                    .selected_index(&items.borrow())
                    .and_then(|idx| i32::try_from(idx).ok())
                    .and_then(|idx| list.row_at_index(idx));
                match row {
                    Some(row) => list.select_row(Some(&row)),
                    None => list.unselect_all(),
                }
            });
        }
        {
            let items = items.clone();
            list.connect_row_activated(move |_, row| {
                let picked = usize::try_from(row.index())
                    .ok()
                    .and_then(|idx| items.borrow().get(idx).cloned());
                if let Some(item) = picked {
                    drawer.open_with_list_item(item);
                }
            });
        }

        Self { root, list, items }
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }

    #[cfg(test)]
    fn selected_index(&self) -> Option<i32> {
        self.list.selected_row().map(|row| row.index())
    }

    pub fn set_items(&self, items: Vec<MessageListItem>) {
        while let Some(child) = self.list.first_child() {
            self.list.remove(&child);
        }
        for item in &items {
            let row = gtk::ListBoxRow::new();
            row.set_child(Some(&list_row(item)));
            self.list.append(&row);
        }
        *self.items.borrow_mut() = items;
    }
}

fn list_row(item: &MessageListItem) -> gtk::Box {
    let row = gtk::Box::new(gtk::Orientation::Horizontal, 8);
    row.set_margin_top(6);
    row.set_margin_bottom(6);
    row.set_margin_start(4);
    row.set_margin_end(4);

    let avatar = adw::Avatar::new(36, Some(&item.worker_name), true);
    avatar.set_valign(gtk::Align::Start);
    row.append(&avatar);

    let text = gtk::Box::new(gtk::Orientation::Vertical, 2);
    text.set_hexpand(true);
    let name = gtk::Label::new(Some(&item.worker_name));
    name.set_halign(gtk::Align::Start);
    if item.unread {
        name.add_css_class("heading");
    }
    let job = gtk::Label::new(Some(&item.job_title));
    job.add_css_class("caption");
    job.add_css_class("dim-label");
    job.set_halign(gtk::Align::Start);
    job.set_ellipsize(gtk::pango::EllipsizeMode::End);
    let preview = gtk::Label::new(Some(&item.last_message));
    preview.set_halign(gtk::Align::Start);
    preview.set_ellipsize(gtk::pango::EllipsizeMode::End);
    preview.set_max_width_chars(28);
    text.append(&name);
    text.append(&job);
    text.append(&preview);
    row.append(&text);

    let side = gtk::Box::new(gtk::Orientation::Vertical, 4);
    let time = gtk::Label::new(Some(&item.timestamp));
    time.add_css_class("caption");
    time.add_css_class("dim-label");
    side.append(&time);
    if item.unread {
        let dot = gtk::Label::new(Some("●"));
        dot.add_css_class("accent");
        dot.set_halign(gtk::Align::End);
        side.append(&dot);
    }
    row.append(&side);
    row
}
