mod chat_view;
mod controls;
mod details;
mod panels;
mod recommendations;
