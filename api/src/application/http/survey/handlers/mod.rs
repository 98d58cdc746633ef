pub mod get_survey;
