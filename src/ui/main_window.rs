use std::rc::Rc;

use adw::prelude::*;
use adw::Application;

use caremarket::api::MessageSource;
use caremarket::app::Settings;
use caremarket::drawer::Drawer;

use crate::ui::drawer_view::DrawerHandle;

pub fn show_main_window(app: &Application) {
    let settings = Settings::load();
    let store: Rc<dyn MessageSource> = Rc::new(settings.open_store());

    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("CareMarket")
        .default_width(1200)
        .default_height(720)
        .build();

    let overlay = adw::ToastOverlay::new();

    let split = adw::Flap::builder()
        .reveal_flap(true)
        .locked(true)
        .modal(false)
        .build();

    // The drawer is created here once and handed to every widget that opens it.
    let drawer = DrawerHandle::new(Drawer::new(store.clone()));

    let sidebar = crate::ui::sidebar::Sidebar::new(drawer.clone());
    sidebar.set_items(store.list_items());
    split.set_flap(Some(&sidebar.widget()));

    let content = gtk4::Box::new(gtk4::Orientation::Horizontal, 0);
    content.append(&crate::ui::candidates::candidate_board(store.candidates(), &drawer));
    content.append(&drawer.widget());
    split.set_content(Some(&content));

    overlay.set_child(Some(&split));

    let container = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
    let header = adw::HeaderBar::new();
    let title = adw::WindowTitle::new("CareMarket", &format!("{} · {}", settings.employer_name, settings.company));
    header.set_title_widget(Some(&title));

    let post_job_btn = gtk4::Button::with_label("Post a Job");
    post_job_btn.add_css_class("suggested-action");
    header.pack_end(&post_job_btn);
    container.append(&header);
    container.append(&overlay);
    window.set_content(Some(&container));
    window.present();

    {
        let window = window.clone();
        let overlay = overlay.clone();
        let delay = settings.submit_delay();
        post_job_btn.connect_clicked(move |_| {
            crate::ui::job_dialog::show_job_dialog(&window, &overlay, delay);
        });
    }
}
