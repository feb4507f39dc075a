use std::collections::HashMap;

use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::application::usecases::{SharedStore, email_is_valid, lock};
use crate::domain::{
    entities::instructors::Instructor,
    value_objects::{
        enums::instructor_statuses::InstructorStatus,
        instructors::{
            CreateInstructorDto, InstructorFilters, InstructorStatistics, SpecialtyCount,
            UpdateInstructorDto,
        },
        pagination::{PaginatedResponse, PaginationParams, paginate},
        responses::ApiResponse,
    },
};

/// Specialties the studio offers, as shown in the instructor forms.
pub const AVAILABLE_SPECIALTIES: [&str; 12] = [
    "CrossFit",
    "Boxeo",
    "Muay Thai",
    "BJJ",
    "Kickboxing",
    "Entrenamiento Funcional",
    "Yoga",
    "Pilates",
    "Calistenia",
    "Halterofilia",
    "Cardio",
    "Nutrición Deportiva",
];

#[derive(Debug, Error, PartialEq)]
pub enum InstructorError {
    #[error("Instructor con ID {0} no encontrado")]
    InstructorIdNotFound(Uuid),
    #[error("Instructor no encontrado")]
    InstructorNotFound,
    #[error("Ya existe un instructor con este email")]
    DuplicateEmail,
    #[error("El formato del email no es válido")]
    InvalidEmail,
    #[error("El instructor debe tener al menos una especialidad")]
    NoSpecialties,
    #[error("No se pudo eliminar el instructor")]
    DeleteFailed,
}

pub type UseCaseResult<T> = Result<T, InstructorError>;

pub struct InstructorsUseCase {
    store: SharedStore,
}

impl InstructorsUseCase {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn list_instructors(
        &self,
        params: Option<PaginationParams>,
        filters: Option<InstructorFilters>,
    ) -> PaginatedResponse<Instructor> {
        let mut instructors = lock(&self.store).get_instructors();

        if let Some(filters) = filters {
            if let Some(search) = filters.search {
                let term = search.to_lowercase();
                instructors.retain(|i| {
                    i.name.to_lowercase().contains(&term)
                        || i.last_name.to_lowercase().contains(&term)
                        || i.email.to_lowercase().contains(&term)
                        || i.specialties
                            .iter()
                            .any(|s| s.to_lowercase().contains(&term))
                });
            }
            if let Some(status) = filters.status {
                instructors.retain(|i| i.status == status);
            }
        }

        paginate(instructors, params)
    }

    pub fn get_instructor(&self, id: Uuid) -> UseCaseResult<Instructor> {
        lock(&self.store)
            .get_instructor_by_id(id)
            .ok_or(InstructorError::InstructorIdNotFound(id))
    }

    pub fn create_instructor(
        &self,
        dto: CreateInstructorDto,
    ) -> UseCaseResult<ApiResponse<Instructor>> {
        let mut store = lock(&self.store);

        let exists = store
            .get_instructors()
            .iter()
            .any(|i| i.email.eq_ignore_ascii_case(&dto.email));
        if exists {
            return Err(InstructorError::DuplicateEmail);
        }
        if !email_is_valid(&dto.email) {
            return Err(InstructorError::InvalidEmail);
        }
        if dto.specialties.is_empty() {
            return Err(InstructorError::NoSpecialties);
        }

        let instructor = store.add_instructor(dto, InstructorStatus::Active);
        info!(instructor_id = %instructor.id, "instructors: instructor created");
        Ok(ApiResponse::ok(
            instructor,
            "Instructor creado exitosamente",
        ))
    }

    pub fn update_instructor(
        &self,
        dto: UpdateInstructorDto,
    ) -> UseCaseResult<ApiResponse<Instructor>> {
        let mut store = lock(&self.store);

        let existing = store
            .get_instructor_by_id(dto.id)
            .ok_or(InstructorError::InstructorNotFound)?;

        if let Some(email) = &dto.patch.email {
            if !email.eq_ignore_ascii_case(&existing.email) {
                let taken = store
                    .get_instructors()
                    .iter()
                    .any(|i| i.id != dto.id && i.email.eq_ignore_ascii_case(email));
                if taken {
                    return Err(InstructorError::DuplicateEmail);
                }
                if !email_is_valid(email) {
                    return Err(InstructorError::InvalidEmail);
                }
            }
        }
        if let Some(specialties) = &dto.patch.specialties {
            if specialties.is_empty() {
                return Err(InstructorError::NoSpecialties);
            }
        }

        let updated = store
            .update_instructor(dto.id, dto.patch)
            .ok_or(InstructorError::InstructorNotFound)?;
        info!(instructor_id = %updated.id, "instructors: instructor updated");
        Ok(ApiResponse::ok(
            updated,
            "Instructor actualizado exitosamente",
        ))
    }

    pub fn toggle_instructor_status(
        &self,
        id: Uuid,
        new_status: InstructorStatus,
    ) -> UseCaseResult<ApiResponse<Instructor>> {
        let mut store = lock(&self.store);

        let updated = store
            .update_instructor(
                id,
                crate::domain::value_objects::instructors::InstructorPatch {
                    status: Some(new_status),
                    ..Default::default()
                },
            )
            .ok_or(InstructorError::InstructorNotFound)?;

        let action = if new_status == InstructorStatus::Active {
            "activado"
        } else {
            "desactivado"
        };
        info!(instructor_id = %id, %new_status, "instructors: status toggled");
        Ok(ApiResponse::ok(
            updated,
            format!("Instructor {} exitosamente", action),
        ))
    }

    pub fn delete_instructor(&self, id: Uuid) -> UseCaseResult<ApiResponse<()>> {
        let mut store = lock(&self.store);

        if !store.delete_instructor(id) {
            warn!(instructor_id = %id, "instructors: delete failed, unknown id");
            return Err(InstructorError::DeleteFailed);
        }

        info!(instructor_id = %id, "instructors: instructor deleted");
        Ok(ApiResponse::message_only(
            "Instructor eliminado exitosamente",
        ))
    }

    /// Counts instructors by status and ranks the five most common
    /// specialties among them.
    pub fn instructor_statistics(&self) -> InstructorStatistics {
        let instructors = lock(&self.store).get_instructors();

        let active_instructors = instructors
            .iter()
            .filter(|i| i.status == InstructorStatus::Active)
            .count();

        let mut counts: HashMap<String, usize> = HashMap::new();
        for instructor in &instructors {
            for specialty in &instructor.specialties {
                *counts.entry(specialty.clone()).or_default() += 1;
            }
        }
        let mut top_specialties: Vec<SpecialtyCount> = counts
            .into_iter()
            .map(|(specialty, count)| SpecialtyCount { specialty, count })
            .collect();
        top_specialties.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.specialty.cmp(&b.specialty))
        });
        top_specialties.truncate(5);

        InstructorStatistics {
            total_instructors: instructors.len(),
            active_instructors,
            inactive_instructors: instructors.len() - active_instructors,
            top_specialties,
        }
    }

    pub fn available_specialties(&self) -> Vec<String> {
        AVAILABLE_SPECIALTIES.iter().map(|s| s.to_string()).collect()
    }
}
