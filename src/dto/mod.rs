pub mod exam_dto;
pub mod webhook_dto;
