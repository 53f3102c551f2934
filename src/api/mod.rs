pub mod sketch;
pub mod ui;

pub use sketch::{
    handle_open, handle_preview, handle_reset_params, handle_save, handle_set_params,
    handle_source, handle_state, handle_upload, FitQuery, OpenRequest, SaveRequest, SaveResponse,
    UploadQuery,
};
pub use ui::{handle_css, handle_index, handle_js};
