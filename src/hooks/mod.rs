pub mod use_notification;
pub mod use_perf_plot;
pub mod use_session;
pub mod use_token_poller;

pub use use_notification::{use_notification, UseNotificationHandle};
pub use use_perf_plot::{
    project_perf, use_perf_plot, PerfPlot, PlotPoint, PlotSeries, UsePerfPlotHandle,
    FALLBACK_AXIS_LABEL, PLOT_PALETTE,
};
pub use use_session::{use_session, SessionAction, UseSessionHandle};
pub use use_token_poller::use_token_poller;
