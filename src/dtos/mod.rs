pub mod post_dtos;
pub mod user_dtos;
