//! Repository Layer - Core Traits
//!
//! Abstract interface for entity collections. Everything lives in memory and
//! every call is synchronous.

use crate::domain::{DomainResult, Entity};

/// Core repository trait for CRUD operations
pub trait Repository<T: Entity> {
    /// Draft type accepted by `create`
    type New;

    /// Create a new entity, assigning its id
    fn create(&mut self, draft: Self::New) -> DomainResult<T>;

    /// Find entity by ID
    fn find_by_id(&self, id: T::Id) -> Option<&T>;

    /// List all entities in display order
    fn list(&self) -> &[T];

    /// Replace the whole entity stored under `id`
    fn replace(&mut self, id: T::Id, entity: T) -> DomainResult<()>;

    /// Delete entity by ID
    fn delete(&mut self, id: T::Id) -> DomainResult<()>;
}
