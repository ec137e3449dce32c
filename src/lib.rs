pub mod bundle;
pub mod client;
pub mod config;
pub mod demo;
pub mod form;
pub mod i18n;
pub mod intake;
pub mod notice;
pub mod page;
pub mod result_view;
pub mod submission;
