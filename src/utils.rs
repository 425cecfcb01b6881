use glib::MainContext;
use once_cell::sync::Lazy;

pub static RUNTIME: Lazy<tokio::runtime::Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()
        .expect("Failed to build Tokio runtime")
});

pub fn spawn_async<F>(fut: F)
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    RUNTIME.spawn(fut);
}

pub fn glib_channel<T: Send + 'static>() -> (glib::Sender<T>, glib::Receiver<T>) {
    MainContext::channel(glib::Priority::default())
}

/// Runs `fut` on the Tokio runtime and delivers its output on the GTK main loop.
pub fn run_async_to_main<T, Fut>(fut: Fut) -> glib::Receiver<T>
where
    T: Send + 'static,
    Fut: std::future::Future<Output = T> + Send + 'static,
{
    let (tx, rx) = glib_channel::<T>();
    spawn_async(async move {
        let res = fut.await;
        if tx.send(res).is_err() {
            log::debug!("Main loop dropped the receiver before the task finished");
        }
    });
    rx
}
