#[path = "common/mod.rs"]
mod common;

#[path = "ui/fake_store.rs"]
mod fake_store;

#[path = "ui/app_component.rs"]
mod app_component;

#[path = "ui/view.rs"]
mod view;
