pub mod app;
pub mod auth;
pub mod console;
pub mod navbar;
pub mod notification;
pub mod pages;
pub mod perf_panel;
pub mod perf_plot;

pub use app::App;
pub use navbar::Navbar;
pub use notification::NotificationToast;
pub use perf_panel::PerfPanel;
pub use perf_plot::PerfPlotView;
