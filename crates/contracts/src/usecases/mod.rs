pub mod shared;
pub mod u501_ask_question;
pub mod u502_list_files;
pub mod u503_file_status;
pub mod u504_upload_file;
