//! `SeaORM` entities for the travel catalog schema.

pub mod prelude;

pub mod accommodation;
pub mod accommodation_type_ref;
pub mod activity_type_ref;
pub mod attraction;
pub mod attraction_image;
pub mod destination;
pub mod destination_accommodation_type;
pub mod destination_activity;
pub mod destination_image;
pub mod destination_signature_dish;
pub mod destination_transport_option;
pub mod restaurant;
pub mod string_list;
pub mod transport_type_ref;
pub mod user;
