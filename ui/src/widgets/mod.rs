pub mod data_browser;
mod row_dialogs;

pub use data_browser::{DataBrowser, DataBrowserResponse, NO_MATCHING_DATA, SEARCH_LABEL};
pub use row_dialogs::{
    CANCEL, CLOSE, CONFIRM_DELETE, DialogResponse, show_delete_confirm, show_row_details,
};
