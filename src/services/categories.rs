use crate::domain::category::Category;
use crate::dto::categories::{CategoryModelOutput, CreateCategoryInput};
use crate::repository::{CategoryRepository, UnitOfWork};

use super::ServiceResult;

/// Creates a new category and persists it through the supplied ports.
///
/// Construction, insert and commit run strictly in that order, each step
/// gated on the previous one succeeding. The first failure is returned to
/// the caller untouched; no compensating action is taken when a later step
/// fails, transactional pairing of the repository and unit of work is the
/// backend's concern.
pub async fn create_category<R, U>(
    input: CreateCategoryInput,
    repo: &R,
    uow: &U,
) -> ServiceResult<CategoryModelOutput>
where
    R: CategoryRepository,
    U: UnitOfWork,
{
    let category =
        Category::with_is_active(&input.name, input.description.as_deref(), input.is_active)?;

    if let Err(e) = repo.insert(&category).await {
        log::error!("Failed to insert category: {e}");
        return Err(e.into());
    }

    if let Err(e) = uow.commit().await {
        log::error!("Failed to commit category insert: {e}");
        return Err(e.into());
    }

    Ok(CategoryModelOutput::from(&category))
}
