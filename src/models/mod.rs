pub mod exam_result;
pub mod question;
pub mod submission;
