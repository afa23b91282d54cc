use crate::{
    data::view::ViewRepository,
    error::AppError,
    model::view::{Region, UpsertViewParam, ViewKind},
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod delete_by_channel;
mod delete_by_guild;
mod fetch;
mod fetch_all;
mod fetch_by_guild;
mod upsert;
