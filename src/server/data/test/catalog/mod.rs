use crate::{
    model::catalog::CatalogKind,
    server::{data::catalog::CatalogRepository, model::catalog::CreateTypeRefParams},
};
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_missing;
mod list;
