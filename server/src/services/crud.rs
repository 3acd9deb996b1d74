use std::marker::PhantomData;
use std::sync::Arc;

use crate::models::DbId;
use crate::repositories::{Record, Repository};
use crate::utils::error::{AppError, AppResult};

/// Plain create/read/update/delete over one table, speaking in domain
/// entities `E` while the repository stores models `M`.
pub struct CrudService<M: Record, E> {
    repo: Arc<dyn Repository<M>>,
    _entity: PhantomData<fn() -> E>,
}

impl<M, E> CrudService<M, E>
where
    M: Record + From<E>,
    E: From<M>,
{
    pub fn new(repo: Arc<dyn Repository<M>>) -> Self {
        Self {
            repo,
            _entity: PhantomData,
        }
    }

    pub async fn list(&self) -> AppResult<Vec<E>> {
        let models = self.repo.find_all().await?;
        Ok(models.into_iter().map(E::from).collect())
    }

    pub async fn get(&self, id: DbId) -> AppResult<E> {
        self.repo
            .find_by_id(id)
            .await?
            .map(E::from)
            .ok_or_else(|| AppError::not_found(M::KIND, id))
    }

    /// Persists a new row. Any id carried by `entity` is discarded.
    pub async fn create(&self, entity: E) -> AppResult<E> {
        let mut model = M::from(entity);
        model.set_id(None);
        let saved = self.repo.save(model).await?;
        tracing::info!(kind = M::KIND, id = ?saved.id(), "Created record");
        Ok(E::from(saved))
    }

    /// Replaces the row `id` with `entity`. An absent row surfaces from the
    /// repository as `MissingRow`, i.e. a 404.
    pub async fn update(&self, id: DbId, entity: E) -> AppResult<E> {
        let mut model = M::from(entity);
        model.set_id(Some(id));
        let saved = self.repo.save(model).await?;
        tracing::info!(kind = M::KIND, id, "Updated record");
        Ok(E::from(saved))
    }

    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        if !self.repo.delete(id).await? {
            return Err(AppError::not_found(M::KIND, id));
        }
        tracing::info!(kind = M::KIND, id, "Deleted record");
        Ok(())
    }
}
