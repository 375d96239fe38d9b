use crate::server::{
    data::user::UserRepository,
    model::{
        page::PageRequest,
        user::{CreateUserParams, UpdateUserParams},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all_paginated;
mod update_profile;
