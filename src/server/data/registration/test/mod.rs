mod create;
mod delete_by_pair;
mod list_by_battle;

use super::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
