use crate::server::{
    data::destination::DestinationRepository,
    model::{
        destination::{
            NewAccommodation, NewAccommodationTypeLink, NewActivity, NewAttraction,
            NewDestination, NewTransportOption,
        },
        page::PageRequest,
    },
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete_aggregate;
mod get_details;
mod get_paginated;
mod unique_slug;

fn new_destination(name: &str) -> NewDestination {
    NewDestination {
        name: name.to_string(),
        description: None,
        tags: vec!["beach".to_string()],
        best_time: None,
        cost_level: None,
        avg_duration: None,
        suitable_for: Vec::new(),
        popular_for: Vec::new(),
        country: "Bangladesh".to_string(),
        region: "Chittagong".to_string(),
        longitude: Some("91.98".to_string()),
        latitude: Some("21.4272".to_string()),
        timezone: "Asia/Dhaka".to_string(),
        weather: None,
        peak_season: None,
        festivals: None,
        languages: Vec::new(),
        payment_methods: Vec::new(),
        safety_tips: None,
        customs: None,
        how_to_reach: None,
    }
}

fn new_accommodation(name: &str, type_ref_id: Option<i32>) -> NewAccommodation {
    NewAccommodation {
        name: name.to_string(),
        type_ref_id,
        price_range: "$$".to_string(),
        rating: Some("4.5".to_string()),
        distance: None,
        region: "Kolatoli".to_string(),
        longitude: None,
        latitude: None,
        phone: None,
        email: None,
        website: None,
    }
}

fn new_attraction(name: &str) -> NewAttraction {
    NewAttraction {
        name: name.to_string(),
        description: None,
        tag: None,
        entry_fee: None,
        opening_hours: None,
        best_time_to_visit: None,
        available_transports: Vec::new(),
        is_recommended: false,
        region: "Chittagong".to_string(),
        longitude: None,
        latitude: None,
    }
}
