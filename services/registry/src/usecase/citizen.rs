use uuid::Uuid;

use crate::domain::repository::CitizenRepository;
use crate::domain::types::Citizen;
use crate::error::RegistryServiceError;

pub struct ListCitizensUseCase<R: CitizenRepository> {
    pub repo: R,
}

impl<R: CitizenRepository> ListCitizensUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Citizen>, RegistryServiceError> {
        self.repo.list().await
    }
}

pub struct DeleteCitizenUseCase<R: CitizenRepository> {
    pub repo: R,
}

impl<R: CitizenRepository> DeleteCitizenUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), RegistryServiceError> {
        if !self.repo.delete(id).await? {
            return Err(RegistryServiceError::CitizenNotFound);
        }
        tracing::info!(citizen_id = %id, "citizen deleted");
        Ok(())
    }
}
