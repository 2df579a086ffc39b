use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, Order, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, TransactionTrait,
    sea_query::{Expr, LikeExpr},
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        author::{
            entities::{Author, AuthorField},
            ports::AuthorRepository,
            value_objects::AuthorsFilter,
        },
        common::entities::app_errors::CoreError,
        course::entities::Course,
        query::{paging::PagedList, sort::SortDirection},
    },
    entity::{
        authors::{ActiveModel as AuthorActiveModel, Column, Entity as AuthorEntity},
        courses::{
            ActiveModel as CourseActiveModel, Column as CourseColumn, Entity as CourseEntity,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PostgresAuthorRepository {
    pub db: DatabaseConnection,
}

impl PostgresAuthorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn author_column(field: AuthorField) -> Column {
    match field {
        AuthorField::Id => Column::Id,
        AuthorField::FirstName => Column::FirstName,
        AuthorField::LastName => Column::LastName,
        AuthorField::DateOfBirth => Column::DateOfBirth,
        AuthorField::MainCategory => Column::MainCategory,
    }
}

const LIKE_ESCAPE: char = '\\';

/// `LIKE` pattern matching `text` literally anywhere in a value.
fn contains_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn column_contains(column: Column, text: &str) -> sea_orm::sea_query::SimpleExpr {
    Expr::col(column).like(LikeExpr::new(contains_pattern(text)).escape(LIKE_ESCAPE))
}

fn sql_order(direction: SortDirection) -> Order {
    match direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    }
}

async fn insert_author_with_courses<C>(
    conn: &C,
    author: &Author,
    courses: &[Course],
) -> Result<(), CoreError>
where
    C: sea_orm::ConnectionTrait,
{
    AuthorEntity::insert(AuthorActiveModel::from(author))
        .exec(conn)
        .await
        .map_err(|e| {
            error!("Failed to create author: {}", e);
            CoreError::InternalServerError
        })?;

    if !courses.is_empty() {
        CourseEntity::insert_many(courses.iter().map(CourseActiveModel::from))
            .exec(conn)
            .await
            .map_err(|e| {
                error!("Failed to create courses for author: {}", e);
                CoreError::InternalServerError
            })?;
    }

    Ok(())
}

impl AuthorRepository for PostgresAuthorRepository {
    async fn get_authors(&self, filter: AuthorsFilter) -> Result<PagedList<Author>, CoreError> {
        let mut query = AuthorEntity::find();

        if let Some(main_category) = filter.main_category() {
            query = query.filter(Column::MainCategory.eq(main_category));
        }

        if let Some(search_query) = filter.search_query() {
            query = query.filter(
                Condition::any()
                    .add(column_contains(Column::MainCategory, search_query))
                    .add(column_contains(Column::FirstName, search_query))
                    .add(column_contains(Column::LastName, search_query)),
            );
        }

        for instruction in &filter.sort {
            query = query.order_by(
                author_column(instruction.field),
                sql_order(instruction.direction),
            );
        }

        let total_count = query.clone().count(&self.db).await.map_err(|e| {
            error!("Failed to count authors: {}", e);
            CoreError::InternalServerError
        })?;

        if filter.page.is_past_end(total_count) {
            return Ok(PagedList::new(Vec::new(), total_count, filter.page));
        }

        let authors = query
            .offset(filter.page.offset())
            .limit(filter.page.page_size)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch authors: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Author::from)
            .collect::<Vec<Author>>();

        Ok(PagedList::new(authors, total_count, filter.page))
    }

    async fn get_authors_by_ids(&self, author_ids: Vec<Uuid>) -> Result<Vec<Author>, CoreError> {
        let authors = AuthorEntity::find()
            .filter(Column::Id.is_in(author_ids))
            .order_by_asc(Column::LastName)
            .order_by_asc(Column::FirstName)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch authors by ids: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Author::from)
            .collect();

        Ok(authors)
    }

    async fn get_author(&self, author_id: Uuid) -> Result<Option<Author>, CoreError> {
        let author = AuthorEntity::find_by_id(author_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get author by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Author::from);

        Ok(author)
    }

    async fn author_exists(&self, author_id: Uuid) -> Result<bool, CoreError> {
        let count = AuthorEntity::find_by_id(author_id)
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to check author existence: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(count > 0)
    }

    async fn create_author(&self, author: Author, courses: Vec<Course>) -> Result<Author, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to start transaction: {}", e);
            CoreError::InternalServerError
        })?;

        insert_author_with_courses(&txn, &author, &courses).await?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit author creation: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(author)
    }

    async fn create_authors(
        &self,
        authors: Vec<(Author, Vec<Course>)>,
    ) -> Result<Vec<Author>, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to start transaction: {}", e);
            CoreError::InternalServerError
        })?;

        for (author, courses) in &authors {
            insert_author_with_courses(&txn, author, courses).await?;
        }

        txn.commit().await.map_err(|e| {
            error!("Failed to commit author collection creation: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(authors.into_iter().map(|(author, _)| author).collect())
    }

    async fn delete_author(&self, author_id: Uuid) -> Result<(), CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to start transaction: {}", e);
            CoreError::InternalServerError
        })?;

        CourseEntity::delete_many()
            .filter(CourseColumn::AuthorId.eq(author_id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to delete courses of author: {}", e);
                CoreError::InternalServerError
            })?;

        AuthorEntity::delete_by_id(author_id)
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to delete author: {}", e);
                CoreError::InternalServerError
            })?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit author deletion: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(())
    }
}
