use std::cell::RefCell;
use std::rc::{Rc, Weak};

use adw::prelude::*;
use gtk4 as gtk;

use caremarket::api::models::{MessageEntry, MessageListItem, WorkerProfile};
use caremarket::drawer::Drawer;

struct DrawerView {
    revealer: gtk::Revealer,
    avatar: adw::Avatar,
    title: gtk::Label,
    subtitle: gtk::Label,
    thread_adjustment: gtk::Adjustment,
    messages_box: gtk::Box,
    entry: gtk::Entry,
    send_btn: gtk::Button,
    close_btn: gtk::Button,
}

impl DrawerView {
    fn new() -> Self {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 6);
        root.set_width_request(380);
        root.set_margin_top(8);
        root.set_margin_bottom(8);
        root.set_margin_start(8);
        root.set_margin_end(8);

        let header = gtk::Box::new(gtk::Orientation::Horizontal, 8);
        let avatar = adw::Avatar::new(40, None, true);
        let titles = gtk::Box::new(gtk::Orientation::Vertical, 2);
        titles.set_hexpand(true);
        let title = gtk::Label::new(None);
        title.add_css_class("heading");
        title.set_halign(gtk::Align::Start);
        let subtitle = gtk::Label::new(None);
        subtitle.add_css_class("dim-label");
        subtitle.set_halign(gtk::Align::Start);
        titles.append(&title);
        titles.append(&subtitle);
        let close_btn = gtk::Button::from_icon_name("window-close-symbolic");
        close_btn.add_css_class("flat");
        close_btn.set_valign(gtk::Align::Start);
        header.append(&avatar);
        header.append(&titles);
        header.append(&close_btn);
        root.append(&header);
        root.append(&gtk::Separator::new(gtk::Orientation::Horizontal));

        let scroller = gtk::ScrolledWindow::builder()
            .vexpand(true)
            .hexpand(true)
            .hscrollbar_policy(gtk::PolicyType::Never)
            .build();
        let messages_box = gtk::Box::new(gtk::Orientation::Vertical, 10);
        scroller.set_child(Some(&messages_box));
        root.append(&scroller);

        // Rows are measured after they are appended; follow the bottom as the content grows.
        let thread_adjustment = scroller.vadjustment();
        thread_adjustment.connect_upper_notify(|adj| adj.set_value(adj.upper() - adj.page_size()));

        // Composer
        let input_row = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        let entry = gtk::Entry::new();
        entry.set_hexpand(true);
        entry.set_placeholder_text(Some("Type a message…"));
        let send_btn = gtk::Button::with_label("Send");
        send_btn.add_css_class("suggested-action");
        input_row.append(&entry);
        input_row.append(&send_btn);
        root.append(&input_row);

        let revealer = gtk::Revealer::builder()
            .transition_type(gtk::RevealerTransitionType::SlideLeft)
            .reveal_child(false)
            .child(&root)
            .build();

        Self { revealer, avatar, title, subtitle, thread_adjustment, messages_box, entry, send_btn, close_btn }
    }

    fn show(&self, item: &MessageListItem, thread: &[MessageEntry]) {
        self.avatar.set_text(Some(&item.worker_name));
        self.title.set_label(&item.worker_name);
        self.subtitle.set_label(&item.job_title);

        while let Some(child) = self.messages_box.first_child() {
            self.messages_box.remove(&child);
        }
        if thread.is_empty() {
            let hint = gtk::Label::new(Some(&format!(
                "No messages yet. Say hello to {} about {}.",
                item.worker_name, item.job_title
            )));
            hint.add_css_class("dim-label");
            hint.set_wrap(true);
            hint.set_vexpand(true);
            self.messages_box.append(&hint);
        }
        for entry in thread {
            self.messages_box.append(&message_bubble(entry));
        }

        let adj = &self.thread_adjustment;
        adj.set_value(adj.upper() - adj.page_size());
        self.revealer.set_reveal_child(true);
    }

    fn hide(&self) {
        self.revealer.set_reveal_child(false);
        while let Some(child) = self.messages_box.first_child() {
            self.messages_box.remove(&child);
        }
    }
}

fn message_bubble(entry: &MessageEntry) -> gtk::Widget {
    let bubble = gtk::Box::new(gtk::Orientation::Vertical, 2);
    bubble.add_css_class("card");
    bubble.set_margin_start(4);
    bubble.set_margin_end(4);

    let text = gtk::Label::new(Some(entry.text()));
    text.set_wrap(true);
    text.set_xalign(0.0);
    text.set_selectable(true);
    text.set_margin_top(6);
    text.set_margin_start(8);
    text.set_margin_end(8);

    let caption = match entry {
        MessageEntry::Employer { sender_name, sender_company, timestamp, .. } => {
            bubble.set_halign(gtk::Align::End);
            [sender_name, sender_company, timestamp]
                .into_iter()
                .filter(|part| !part.is_empty())
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(" · ")
        }
        MessageEntry::Worker { timestamp, .. } => {
            bubble.set_halign(gtk::Align::Start);
            timestamp.clone()
        }
    };
    let meta = gtk::Label::new(Some(&caption));
    meta.add_css_class("caption");
    meta.add_css_class("dim-label");
    meta.set_xalign(0.0);
    meta.set_margin_bottom(6);
    meta.set_margin_start(8);
    meta.set_margin_end(8);

    bubble.append(&text);
    bubble.append(&meta);
    bubble.upcast()
}

type Listeners = RefCell<Vec<Box<dyn Fn(&Drawer)>>>;

/// Shared handle to the messaging drawer. Built once by the main window and
/// cloned into every widget that opens a conversation.
#[derive(Clone)]
pub struct DrawerHandle {
    drawer: Rc<RefCell<Drawer>>,
    view: Rc<DrawerView>,
    listeners: Rc<Listeners>,
}

/// Non-owning handle, for closures stored inside the drawer's own widgets.
pub struct WeakDrawerHandle {
    drawer: Weak<RefCell<Drawer>>,
    view: Weak<DrawerView>,
    listeners: Weak<Listeners>,
}

impl WeakDrawerHandle {
    pub fn upgrade(&self) -> Option<DrawerHandle> {
        Some(DrawerHandle {
            drawer: self.drawer.upgrade()?,
            view: self.view.upgrade()?,
            listeners: self.listeners.upgrade()?,
        })
    }
}

impl DrawerHandle {
    pub fn new(drawer: Drawer) -> Self {
        let handle = Self {
            drawer: Rc::new(RefCell::new(drawer)),
            view: Rc::new(DrawerView::new()),
            listeners: Rc::default(),
        };

        {
            let drawer = handle.drawer.clone();
            handle.view.entry.connect_changed(move |entry| {
                drawer.borrow_mut().composer_mut().set_draft(entry.text().as_str());
            });
        }

        let send: Rc<dyn Fn(&gtk::Entry)> = {
            let drawer = Rc::downgrade(&handle.drawer);
            Rc::new(move |entry: &gtk::Entry| {
                let Some(drawer) = drawer.upgrade() else { return };
                let sent = drawer.borrow_mut().composer_mut().send();
                if let Some(text) = sent {
                    let to = drawer.borrow().selection().map(|s| s.worker_name.clone()).unwrap_or_default();
                    log::info!("Send to {to}: {text}");
                    entry.set_text("");
                }
            })
        };
        {
            let send = send.clone();
            let entry = handle.view.entry.downgrade();
            handle.view.send_btn.connect_clicked(move |_| {
                if let Some(entry) = entry.upgrade() {
                    (send)(&entry);
                }
            });
        }
        {
            let send = send.clone();
            handle.view.entry.connect_activate(move |entry| (send)(entry));
        }
        {
            let weak = handle.downgrade();
            handle.view.close_btn.connect_clicked(move |_| {
                if let Some(h) = weak.upgrade() {
                    h.close();
                }
            });
        }

        handle
    }

    pub fn downgrade(&self) -> WeakDrawerHandle {
        WeakDrawerHandle {
            drawer: Rc::downgrade(&self.drawer),
            view: Rc::downgrade(&self.view),
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    pub fn widget(&self) -> gtk::Widget {
        self.view.revealer.clone().upcast()
    }

    /// Called after every open or close with the updated drawer.
    pub fn connect_selection_changed(&self, f: impl Fn(&Drawer) + 'static) {
        self.listeners.borrow_mut().push(Box::new(f));
    }

    pub fn open_by_worker_id(&self, worker_id: &str) -> bool {
        let opened = self.drawer.borrow_mut().open_by_worker_id(worker_id);
        if opened {
            self.refresh();
        }
        opened
    }

    pub fn open_with_list_item(&self, item: MessageListItem) {
        self.drawer.borrow_mut().open_with_list_item(item);
        self.refresh();
    }

    pub fn open_fresh_conversation(&self, worker: &WorkerProfile, job_title: &str) {
        self.drawer.borrow_mut().open_fresh_conversation(worker, job_title);
        self.refresh();
    }

    pub fn close(&self) {
        self.drawer.borrow_mut().close();
        self.refresh();
    }

    #[cfg(test)]
    pub(crate) fn thread_adjustment(&self) -> gtk::Adjustment {
        self.view.thread_adjustment.clone()
    }

    fn refresh(&self) {
        // Copy out first: clearing the entry re-enters the drawer through `changed`.
        let current = {
            let drawer = self.drawer.borrow();
            drawer
                .selection()
                .cloned()
                .map(|item| (item, drawer.thread().map(<[_]>::to_vec).unwrap_or_default()))
        };
        self.view.entry.set_text("");
        match current {
            Some((item, thread)) => self.view.show(&item, &thread),
            None => self.view.hide(),
        }

        let drawer = self.drawer.borrow();
        for listener in self.listeners.borrow().iter() {
            listener(&drawer);
        }
    }
}
