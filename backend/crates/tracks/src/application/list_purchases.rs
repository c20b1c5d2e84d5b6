//! List Purchases Use Case

use kernel::id::UserId;
use std::sync::Arc;

use crate::domain::entities::Purchase;
use crate::domain::repository::PurchaseRepository;
use crate::error::TracksResult;

/// List purchases use case
pub struct ListPurchasesUseCase<P>
where
    P: PurchaseRepository,
{
    purchase_repo: Arc<P>,
}

impl<P> ListPurchasesUseCase<P>
where
    P: PurchaseRepository,
{
    pub fn new(purchase_repo: Arc<P>) -> Self {
        Self { purchase_repo }
    }

    pub async fn execute(&self, user_id: &UserId) -> TracksResult<Vec<Purchase>> {
        self.purchase_repo.list_by_user(user_id).await
    }
}
