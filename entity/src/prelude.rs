pub use super::accommodation::Entity as Accommodation;
pub use super::accommodation_type_ref::Entity as AccommodationTypeRef;
pub use super::activity_type_ref::Entity as ActivityTypeRef;
pub use super::attraction::Entity as Attraction;
pub use super::attraction_image::Entity as AttractionImage;
pub use super::destination::Entity as Destination;
pub use super::destination_accommodation_type::Entity as DestinationAccommodationType;
pub use super::destination_activity::Entity as DestinationActivity;
pub use super::destination_image::Entity as DestinationImage;
pub use super::destination_signature_dish::Entity as DestinationSignatureDish;
pub use super::destination_transport_option::Entity as DestinationTransportOption;
pub use super::restaurant::Entity as Restaurant;
pub use super::transport_type_ref::Entity as TransportTypeRef;
pub use super::user::Entity as User;
