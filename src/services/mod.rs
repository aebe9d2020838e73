pub mod assembly_service;
pub mod grading_service;
pub mod notification_service;
pub mod pass_policy;
pub mod question_bank;
