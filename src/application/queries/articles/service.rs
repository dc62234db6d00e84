// src/application/queries/articles/service.rs
use std::sync::Arc;

use crate::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    category::CategoryRepository,
    reaction::ArticleReactionRepository,
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) reaction_repo: Arc<dyn ArticleReactionRepository>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        write_repo: Arc<dyn ArticleWriteRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        reaction_repo: Arc<dyn ArticleReactionRepository>,
    ) -> Self {
        Self {
            read_repo,
            write_repo,
            category_repo,
            reaction_repo,
        }
    }
}
