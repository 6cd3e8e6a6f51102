mod composer;
mod file_select;
mod message_list;
mod view;
mod view_model;
mod waiting_indicator;

pub use view::ChatPage;
pub use view_model::ChatSessionVm;
