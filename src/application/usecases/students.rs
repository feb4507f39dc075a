use std::collections::BTreeMap;

use chrono::Utc;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::application::usecases::{SharedStore, email_is_valid, lock};
use crate::domain::{
    entities::students::Student,
    value_objects::{
        enums::{student_plan_statuses::StudentPlanStatus, student_statuses::StudentStatus},
        pagination::{PaginatedResponse, PaginationParams, paginate},
        responses::ApiResponse,
        students::{
            CreateStudentDto, DetailedStudent, PlanEnrollment, StudentFilters,
            StudentStatistics, UpdateStudentDto,
        },
    },
};

#[derive(Debug, Error, PartialEq)]
pub enum StudentError {
    #[error("Alumno con ID {0} no encontrado")]
    StudentIdNotFound(Uuid),
    #[error("Alumno no encontrado")]
    StudentNotFound,
    #[error("Ya existe un alumno con este email")]
    DuplicateEmail,
    #[error("El formato del email no es válido")]
    InvalidEmail,
    #[error("La fecha de nacimiento debe ser anterior a hoy")]
    BirthDateNotInPast,
    #[error("No se puede desactivar un alumno con planes activos. Primero cancele su plan.")]
    DeactivationBlocked,
    #[error("No se puede eliminar un alumno con planes activos")]
    DeleteBlockedByActivePlan,
    #[error("No se pudo eliminar el alumno")]
    DeleteFailed,
}

pub type UseCaseResult<T> = Result<T, StudentError>;

pub struct StudentsUseCase {
    store: SharedStore,
}

impl StudentsUseCase {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn list_students(
        &self,
        params: Option<PaginationParams>,
        filters: Option<StudentFilters>,
    ) -> PaginatedResponse<DetailedStudent> {
        let store = lock(&self.store);

        let mut detailed: Vec<DetailedStudent> = store
            .get_students()
            .into_iter()
            .map(|student| {
                let active_plan = store.student_active_plan(student.id);
                DetailedStudent {
                    student,
                    active_plan,
                    upcoming_reservations: None,
                }
            })
            .collect();
        drop(store);

        if let Some(filters) = filters {
            if let Some(search) = filters.search {
                let term = search.to_lowercase();
                detailed.retain(|d| {
                    d.student.first_name.to_lowercase().contains(&term)
                        || d.student.last_name.to_lowercase().contains(&term)
                        || d.student.email.to_lowercase().contains(&term)
                });
            }
            if let Some(plan_id) = filters.plan_id {
                detailed.retain(|d| {
                    d.active_plan
                        .as_ref()
                        .is_some_and(|sp| sp.plan_id == plan_id)
                });
            }
            if let Some(status) = filters.status {
                detailed.retain(|d| d.student.status == status);
            }
        }

        paginate(detailed, params)
    }

    pub fn get_student(&self, id: Uuid) -> UseCaseResult<DetailedStudent> {
        let store = lock(&self.store);
        let student = store
            .get_student_by_id(id)
            .ok_or(StudentError::StudentIdNotFound(id))?;
        let active_plan = store.student_active_plan(id);
        let upcoming = store.student_future_reservations(id);

        Ok(DetailedStudent {
            student,
            active_plan,
            upcoming_reservations: Some(upcoming),
        })
    }

    pub fn create_student(&self, dto: CreateStudentDto) -> UseCaseResult<ApiResponse<Student>> {
        let mut store = lock(&self.store);

        let exists = store
            .get_students()
            .iter()
            .any(|s| s.email.eq_ignore_ascii_case(&dto.email));
        if exists {
            return Err(StudentError::DuplicateEmail);
        }
        if !email_is_valid(&dto.email) {
            return Err(StudentError::InvalidEmail);
        }
        if dto.birth_date >= Utc::now().date_naive() {
            return Err(StudentError::BirthDateNotInPast);
        }

        let student = store.add_student(dto, StudentStatus::Active);
        info!(student_id = %student.id, "students: student created");
        Ok(ApiResponse::ok(student, "Alumno creado exitosamente"))
    }

    pub fn update_student(&self, dto: UpdateStudentDto) -> UseCaseResult<ApiResponse<Student>> {
        let mut store = lock(&self.store);

        let existing = store
            .get_student_by_id(dto.id)
            .ok_or(StudentError::StudentNotFound)?;

        if let Some(email) = &dto.patch.email {
            if !email.eq_ignore_ascii_case(&existing.email) {
                let taken = store
                    .get_students()
                    .iter()
                    .any(|s| s.id != dto.id && s.email.eq_ignore_ascii_case(email));
                if taken {
                    return Err(StudentError::DuplicateEmail);
                }
                if !email_is_valid(email) {
                    return Err(StudentError::InvalidEmail);
                }
            }
        }
        if let Some(birth_date) = dto.patch.birth_date {
            if birth_date >= Utc::now().date_naive() {
                return Err(StudentError::BirthDateNotInPast);
            }
        }

        let updated = store
            .update_student(dto.id, dto.patch)
            .ok_or(StudentError::StudentNotFound)?;
        info!(student_id = %updated.id, "students: student updated");
        Ok(ApiResponse::ok(updated, "Alumno actualizado exitosamente"))
    }

    /// Switches a student between active and inactive. Deactivation is
    /// refused while the student still holds an active plan.
    pub fn toggle_student_status(
        &self,
        id: Uuid,
        new_status: StudentStatus,
    ) -> UseCaseResult<ApiResponse<Student>> {
        let mut store = lock(&self.store);

        store
            .get_student_by_id(id)
            .ok_or(StudentError::StudentNotFound)?;

        if new_status == StudentStatus::Inactive && store.student_has_active_plan(id) {
            warn!(student_id = %id, "students: deactivation refused, active plan");
            return Err(StudentError::DeactivationBlocked);
        }

        let updated = store
            .update_student(
                id,
                crate::domain::value_objects::students::StudentPatch {
                    status: Some(new_status),
                    ..Default::default()
                },
            )
            .ok_or(StudentError::StudentNotFound)?;

        let action = if new_status == StudentStatus::Active {
            "activado"
        } else {
            "desactivado"
        };
        info!(student_id = %id, %new_status, "students: status toggled");
        Ok(ApiResponse::ok(
            updated,
            format!("Alumno {} exitosamente", action),
        ))
    }

    pub fn delete_student(&self, id: Uuid) -> UseCaseResult<ApiResponse<()>> {
        let mut store = lock(&self.store);

        if store.student_has_active_plan(id) {
            warn!(student_id = %id, "students: delete refused, active plan");
            return Err(StudentError::DeleteBlockedByActivePlan);
        }
        if !store.delete_student(id) {
            return Err(StudentError::DeleteFailed);
        }

        info!(student_id = %id, "students: student deleted");
        Ok(ApiResponse::message_only("Alumno eliminado exitosamente"))
    }

    pub fn student_statistics(&self) -> StudentStatistics {
        let store = lock(&self.store);
        let students = store.get_students();
        let student_plans = store.get_student_plans();

        let active_students = students
            .iter()
            .filter(|s| s.status == StudentStatus::Active)
            .count();
        let inactive_students = students
            .iter()
            .filter(|s| s.status == StudentStatus::Inactive)
            .count();
        let students_with_active_plans = student_plans
            .iter()
            .filter(|sp| sp.status == StudentPlanStatus::Active)
            .count();

        StudentStatistics {
            total_students: students.len(),
            active_students,
            inactive_students,
            students_with_active_plans,
            students_without_plans: active_students.saturating_sub(students_with_active_plans),
        }
    }

    /// Plans that have at least one enrollment, with enrollment counts.
    pub fn plans_with_students(&self) -> Vec<PlanEnrollment> {
        let store = lock(&self.store);
        let student_plans = store.get_student_plans();
        let plans = store.get_plans();

        let mut counts: BTreeMap<Uuid, usize> = BTreeMap::new();
        for sp in &student_plans {
            *counts.entry(sp.plan_id).or_default() += 1;
        }

        counts
            .into_iter()
            .map(|(plan_id, students_count)| {
                let name = plans
                    .iter()
                    .find(|plan| plan.id == plan_id)
                    .map(|plan| plan.name.clone())
                    .unwrap_or_else(|| "Plan no encontrado".to_string());
                PlanEnrollment {
                    id: plan_id,
                    name,
                    students_count,
                }
            })
            .collect()
    }
}
