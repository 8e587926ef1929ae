mod check_code;
mod forms;
mod helpers;
mod request_code;
