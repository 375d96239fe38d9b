mod catalog;
mod destination;
mod image;
mod user;
