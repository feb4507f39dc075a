use chrono::Duration;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::application::usecases::{SharedStore, lock};
use crate::domain::{
    entities::{
        plans::{Plan, PlanType},
        student_plans::{FrozenPeriod, StudentPlan},
    },
    value_objects::{
        enums::{plan_statuses::PlanStatus, student_plan_statuses::StudentPlanStatus},
        pagination::{PaginatedResponse, PaginationParams, paginate},
        plans::{CreatePlanDto, CreatePlanTypeDto, PlanFilters, PlanStatistics, UpdatePlanDto},
        responses::ApiResponse,
        student_plans::{
            ActivatePlanDto, CancelPlanDto, FreezePlanDto, NewStudentPlan, StudentPlanPatch,
        },
    },
};

/// Reason recorded on a plan that was displaced by a newer activation.
pub const REPLACED_BY_NEW_PLAN: &str = "Replaced by new plan";

const ESTIMATED_REVENUE_PER_ACTIVE_PLAN: i64 = 50000;

#[derive(Debug, Error, PartialEq)]
pub enum PlanError {
    #[error("Plan con ID {0} no encontrado")]
    PlanIdNotFound(Uuid),
    #[error("Plan no encontrado")]
    PlanNotFound,
    #[error("Alumno no encontrado")]
    StudentNotFound,
    #[error("Plan del alumno no encontrado")]
    StudentPlanNotFound,
    #[error("Ya existe un plan con este nombre")]
    DuplicatePlanName,
    #[error("Ya existe un tipo de plan con este nombre")]
    DuplicatePlanTypeName,
    #[error("La duración debe ser mayor a 0")]
    InvalidDuration,
    #[error("El precio debe ser mayor o igual a 0")]
    InvalidPrice,
    #[error("El número de clases debe ser mayor a 0")]
    InvalidIncludedClasses,
    #[error("No se puede cambiar el tipo de plan mientras haya alumnos activos")]
    TypeChangeWithActiveStudents,
    #[error("No se puede eliminar el plan. Verifique que no tenga alumnos activos.")]
    DeleteBlocked,
    #[error("Solo se pueden congelar planes activos")]
    OnlyActivePlansCanBeFrozen,
    #[error("El plan ya está anulado")]
    AlreadyCanceled,
    #[error("Error al congelar el plan")]
    FreezeFailed,
    #[error("Error al anular el plan")]
    CancelFailed,
}

pub type UseCaseResult<T> = Result<T, PlanError>;

/// Plan CRUD plus the student-plan lifecycle (activate / freeze / cancel).
pub struct PlansUseCase {
    store: SharedStore,
}

impl PlansUseCase {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn list_plans(
        &self,
        params: Option<PaginationParams>,
        filters: Option<PlanFilters>,
    ) -> PaginatedResponse<Plan> {
        let mut plans = lock(&self.store).get_plans();

        if let Some(filters) = filters {
            if let Some(search) = filters.search {
                let term = search.to_lowercase();
                plans.retain(|plan| {
                    plan.name.to_lowercase().contains(&term)
                        || plan.description.to_lowercase().contains(&term)
                });
            }
            if let Some(status) = filters.status {
                plans.retain(|plan| plan.status == status);
            }
        }

        paginate(plans, params)
    }

    pub fn get_plan(&self, id: Uuid) -> UseCaseResult<Plan> {
        lock(&self.store)
            .get_plan_by_id(id)
            .ok_or(PlanError::PlanIdNotFound(id))
    }

    pub fn has_active_students(&self, plan_id: Uuid) -> bool {
        lock(&self.store).plan_has_active_students(plan_id)
    }

    pub fn create_plan_type(
        &self,
        dto: CreatePlanTypeDto,
    ) -> UseCaseResult<ApiResponse<PlanType>> {
        let mut store = lock(&self.store);

        let exists = store
            .get_plan_types()
            .iter()
            .any(|pt| pt.name.eq_ignore_ascii_case(&dto.name));
        if exists {
            return Err(PlanError::DuplicatePlanTypeName);
        }

        let plan_type = store.add_plan_type(dto);
        info!(plan_type_id = %plan_type.id, "plans: plan type created");
        Ok(ApiResponse::ok(plan_type, "Tipo de plan creado exitosamente"))
    }

    pub fn create_plan(&self, dto: CreatePlanDto) -> UseCaseResult<ApiResponse<Plan>> {
        let mut store = lock(&self.store);

        let exists = store
            .get_plans()
            .iter()
            .any(|plan| plan.name.eq_ignore_ascii_case(&dto.name));
        if exists {
            return Err(PlanError::DuplicatePlanName);
        }
        if dto.duration_days <= 0 {
            return Err(PlanError::InvalidDuration);
        }
        if dto.price < 0 {
            return Err(PlanError::InvalidPrice);
        }

        let plan = store.add_plan(dto, PlanStatus::Active);
        info!(plan_id = %plan.id, name = %plan.name, "plans: plan created");
        Ok(ApiResponse::ok(plan, "Plan creado exitosamente"))
    }

    pub fn update_plan(&self, dto: UpdatePlanDto) -> UseCaseResult<ApiResponse<Plan>> {
        let mut store = lock(&self.store);

        let existing = store
            .get_plan_by_id(dto.id)
            .ok_or(PlanError::PlanNotFound)?;
        let has_active_students = store.plan_has_active_students(dto.id);

        // Students already enrolled keep the conditions they signed up for,
        // so the discipline of the plan cannot move under them.
        if has_active_students {
            if let Some(new_types) = &dto.patch.plan_types {
                if *new_types != existing.plan_types {
                    return Err(PlanError::TypeChangeWithActiveStudents);
                }
            }
        }

        if let Some(new_name) = &dto.patch.name {
            if !new_name.eq_ignore_ascii_case(&existing.name) {
                let taken = store
                    .get_plans()
                    .iter()
                    .any(|plan| plan.id != dto.id && plan.name.eq_ignore_ascii_case(new_name));
                if taken {
                    return Err(PlanError::DuplicatePlanName);
                }
            }
        }
        if let Some(duration_days) = dto.patch.duration_days {
            if duration_days <= 0 {
                return Err(PlanError::InvalidDuration);
            }
        }
        if let Some(price) = dto.patch.price {
            if price < 0 {
                return Err(PlanError::InvalidPrice);
            }
        }
        if let Some(included_classes) = dto.patch.included_classes {
            if included_classes <= 0 {
                return Err(PlanError::InvalidIncludedClasses);
            }
        }

        let updated = store
            .update_plan(dto.id, dto.patch)
            .ok_or(PlanError::PlanNotFound)?;
        info!(plan_id = %updated.id, "plans: plan updated");

        let message = if has_active_students {
            "Plan actualizado. Los cambios no afectan a alumnos activos."
        } else {
            "Plan actualizado exitosamente"
        };
        Ok(ApiResponse::ok(updated, message))
    }

    pub fn delete_plan(&self, id: Uuid) -> UseCaseResult<ApiResponse<()>> {
        let mut store = lock(&self.store);

        if !store.delete_plan(id) {
            warn!(plan_id = %id, "plans: delete refused");
            return Err(PlanError::DeleteBlocked);
        }

        info!(plan_id = %id, "plans: plan deleted");
        Ok(ApiResponse::message_only("Plan eliminado exitosamente"))
    }

    /// Assigns a plan to a student as their active plan. A previously active
    /// plan is cancelled in the same operation; its reservations are left
    /// untouched.
    pub fn activate_student_plan(
        &self,
        dto: ActivatePlanDto,
    ) -> UseCaseResult<ApiResponse<StudentPlan>> {
        let mut store = lock(&self.store);

        let student = store
            .get_student_by_id(dto.student_id)
            .ok_or(PlanError::StudentNotFound)?;
        let plan = store
            .get_plan_by_id(dto.plan_id)
            .ok_or(PlanError::PlanNotFound)?;

        if let Some(previous) = store.student_active_plan(dto.student_id) {
            info!(
                student_plan_id = %previous.id,
                "plans: replacing previously active student plan"
            );
            store.update_student_plan(
                previous.id,
                StudentPlanPatch {
                    status: Some(StudentPlanStatus::Canceled),
                    reason_cancellation: Some(REPLACED_BY_NEW_PLAN.to_string()),
                    ..Default::default()
                },
            );
        }

        let end_date = dto.start_date + Duration::days(plan.duration_days);
        let created = store.add_student_plan(NewStudentPlan {
            student_id: dto.student_id,
            plan_id: dto.plan_id,
            start_date: dto.start_date,
            end_date,
            remaining_classes: dto.included_classes.unwrap_or(plan.included_classes),
            status: StudentPlanStatus::Active,
        });

        info!(
            student_plan_id = %created.id,
            student_id = %dto.student_id,
            plan_id = %dto.plan_id,
            "plans: student plan activated"
        );
        let message = format!(
            "Plan {} activado para {} {}",
            plan.name, student.first_name, student.last_name
        );
        Ok(ApiResponse::ok(created, message))
    }

    /// Pauses an active plan for the given window, extending the end date by
    /// the ceiling of the window length in whole days.
    pub fn freeze_student_plan(
        &self,
        dto: FreezePlanDto,
    ) -> UseCaseResult<ApiResponse<StudentPlan>> {
        let mut store = lock(&self.store);

        let student_plan = store
            .get_student_plan_by_id(dto.student_plan_id)
            .ok_or(PlanError::StudentPlanNotFound)?;
        if student_plan.status != StudentPlanStatus::Active {
            return Err(PlanError::OnlyActivePlansCanBeFrozen);
        }

        let frozen_seconds = (dto.end_date - dto.start_date).num_seconds();
        let days_freezing = frozen_seconds.div_ceil(86_400);
        let new_end_date = student_plan.end_date + Duration::days(days_freezing);

        let mut frozen_periods = student_plan.frozen_periods.unwrap_or_default();
        frozen_periods.push(FrozenPeriod {
            start: dto.start_date,
            end: dto.end_date,
            reason: dto.reason,
        });

        let updated = store
            .update_student_plan(
                dto.student_plan_id,
                StudentPlanPatch {
                    status: Some(StudentPlanStatus::Frozen),
                    end_date: Some(new_end_date),
                    frozen_periods: Some(frozen_periods),
                    ..Default::default()
                },
            )
            .ok_or(PlanError::FreezeFailed)?;

        // TODO: cancel future reservations that fall inside the freeze
        // window and notify the student.

        info!(
            student_plan_id = %updated.id,
            days_freezing,
            "plans: student plan frozen"
        );
        Ok(ApiResponse::ok(updated, "Plan congelado exitosamente"))
    }

    pub fn cancel_student_plan(
        &self,
        dto: CancelPlanDto,
    ) -> UseCaseResult<ApiResponse<StudentPlan>> {
        let mut store = lock(&self.store);

        let student_plan = store
            .get_student_plan_by_id(dto.student_plan_id)
            .ok_or(PlanError::StudentPlanNotFound)?;
        if student_plan.status == StudentPlanStatus::Canceled {
            return Err(PlanError::AlreadyCanceled);
        }

        let updated = store
            .update_student_plan(
                dto.student_plan_id,
                StudentPlanPatch {
                    status: Some(StudentPlanStatus::Canceled),
                    reason_cancellation: Some(dto.reason),
                    ..Default::default()
                },
            )
            .ok_or(PlanError::CancelFailed)?;

        // TODO: cancel the plan's future reservations, release their spots
        // and notify the student.

        info!(student_plan_id = %updated.id, "plans: student plan cancelled");
        Ok(ApiResponse::ok(updated, "Plan anulado exitosamente"))
    }

    pub fn active_plans(&self) -> Vec<StudentPlan> {
        lock(&self.store)
            .get_student_plans()
            .into_iter()
            .filter(|sp| sp.status == StudentPlanStatus::Active)
            .collect()
    }

    pub fn plan_statistics(&self) -> PlanStatistics {
        let store = lock(&self.store);
        let plans = store.get_plans();
        let student_plans = store.get_student_plans();

        let active_plans = plans
            .iter()
            .filter(|plan| plan.status == PlanStatus::Active)
            .count();
        let active_assignments = student_plans
            .iter()
            .filter(|sp| sp.status == StudentPlanStatus::Active)
            .count();

        PlanStatistics {
            total_plans: plans.len(),
            active_plans,
            total_assignments: student_plans.len(),
            active_assignments,
            estimated_revenue: active_assignments as i64 * ESTIMATED_REVENUE_PER_ACTIVE_PLAN,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use chrono::{Duration, Utc};

    use super::*;
    use crate::datastore::DataStore;
    use crate::infrastructure::storage::snapshot::MemorySnapshotStore;

    fn usecase() -> PlansUseCase {
        let store = DataStore::new(Box::new(MemorySnapshotStore::default()));
        PlansUseCase::new(Arc::new(Mutex::new(store)))
    }

    fn plan_dto(name: &str) -> CreatePlanDto {
        CreatePlanDto {
            name: name.to_string(),
            plan_types: vec![],
            description: "Plan de prueba".to_string(),
            duration_days: 30,
            included_classes: 8,
            price: 45000,
            documents: None,
            images: None,
        }
    }

    #[test]
    fn create_plan_rejects_duplicate_name_case_insensitively() {
        let plans = usecase();
        assert_eq!(
            plans.create_plan(plan_dto("plan crossfit básico")).unwrap_err(),
            PlanError::DuplicatePlanName
        );
    }

    #[test]
    fn create_plan_type_rejects_duplicate_name_case_insensitively() {
        let plans = usecase();

        assert_eq!(
            plans
                .create_plan_type(CreatePlanTypeDto {
                    name: "crossfit".to_string(),
                    format: crate::domain::value_objects::enums::plan_formats::PlanFormat::InPerson,
                })
                .unwrap_err(),
            PlanError::DuplicatePlanTypeName
        );

        let created = plans
            .create_plan_type(CreatePlanTypeDto {
                name: "FUNCIONAL".to_string(),
                format: crate::domain::value_objects::enums::plan_formats::PlanFormat::InPerson,
            })
            .unwrap();
        assert_eq!(created.data.unwrap().name, "FUNCIONAL");
    }

    #[test]
    fn create_plan_validates_duration_and_price() {
        let plans = usecase();

        let mut dto = plan_dto("Plan Raro");
        dto.duration_days = 0;
        assert_eq!(plans.create_plan(dto).unwrap_err(), PlanError::InvalidDuration);

        let mut dto = plan_dto("Plan Raro");
        dto.price = -1;
        assert_eq!(plans.create_plan(dto).unwrap_err(), PlanError::InvalidPrice);
    }

    #[test]
    fn update_plan_refuses_type_change_while_students_are_active() {
        let plans = usecase();
        let held = lock(&plans.store).get_student_plans()[0].clone();
        let other_type = lock(&plans.store).get_plan_types()[1].clone();

        let err = plans
            .update_plan(UpdatePlanDto {
                id: held.plan_id,
                patch: crate::domain::value_objects::plans::PlanPatch {
                    plan_types: Some(vec![other_type]),
                    ..Default::default()
                },
            })
            .unwrap_err();
        assert_eq!(err, PlanError::TypeChangeWithActiveStudents);
    }

    #[test]
    fn update_plan_message_mentions_active_students() {
        let plans = usecase();
        let held = lock(&plans.store).get_student_plans()[0].clone();

        let response = plans
            .update_plan(UpdatePlanDto {
                id: held.plan_id,
                patch: crate::domain::value_objects::plans::PlanPatch {
                    price: Some(47000),
                    ..Default::default()
                },
            })
            .unwrap();
        assert_eq!(
            response.message,
            "Plan actualizado. Los cambios no afectan a alumnos activos."
        );
        assert_eq!(response.data.unwrap().price, 47000);
    }

    #[test]
    fn delete_plan_is_blocked_by_active_students_then_allowed() {
        let plans = usecase();
        let held = lock(&plans.store).get_student_plans()[0].clone();

        assert_eq!(
            plans.delete_plan(held.plan_id).unwrap_err(),
            PlanError::DeleteBlocked
        );

        plans
            .cancel_student_plan(CancelPlanDto {
                student_plan_id: held.id,
                reason: "Retiro voluntario".to_string(),
            })
            .unwrap();

        plans.delete_plan(held.plan_id).unwrap();
        assert!(matches!(
            plans.get_plan(held.plan_id),
            Err(PlanError::PlanIdNotFound(_))
        ));
    }

    #[test]
    fn activating_a_second_plan_demotes_the_previous_active_one() {
        let plans = usecase();
        let previous = lock(&plans.store).get_student_plans()[0].clone();
        let new_plan = lock(&plans.store).get_plans()[1].clone();
        let start = Utc::now();

        let response = plans
            .activate_student_plan(ActivatePlanDto {
                student_id: previous.student_id,
                plan_id: new_plan.id,
                start_date: start,
                included_classes: None,
            })
            .unwrap();
        let created = response.data.unwrap();

        assert_eq!(created.status, StudentPlanStatus::Active);
        assert_eq!(created.end_date, start + Duration::days(new_plan.duration_days));
        assert_eq!(created.remaining_classes, new_plan.included_classes);

        let demoted = lock(&plans.store)
            .get_student_plan_by_id(previous.id)
            .unwrap();
        assert_eq!(demoted.status, StudentPlanStatus::Canceled);
        assert_eq!(
            demoted.reason_cancellation.as_deref(),
            Some(REPLACED_BY_NEW_PLAN)
        );

        // exactly one active plan remains for the student
        let active = lock(&plans.store).student_active_plan(previous.student_id);
        assert_eq!(active.map(|sp| sp.id), Some(created.id));
    }

    #[test]
    fn activation_honors_the_class_override() {
        let plans = usecase();
        let student = lock(&plans.store).get_students()[2].clone();
        let plan = lock(&plans.store).get_plans()[0].clone();

        let created = plans
            .activate_student_plan(ActivatePlanDto {
                student_id: student.id,
                plan_id: plan.id,
                start_date: Utc::now(),
                included_classes: Some(12),
            })
            .unwrap()
            .data
            .unwrap();
        assert_eq!(created.remaining_classes, 12);
    }

    #[test]
    fn activation_requires_existing_student_and_plan() {
        let plans = usecase();
        let plan = lock(&plans.store).get_plans()[0].clone();

        let err = plans
            .activate_student_plan(ActivatePlanDto {
                student_id: Uuid::new_v4(),
                plan_id: plan.id,
                start_date: Utc::now(),
                included_classes: None,
            })
            .unwrap_err();
        assert_eq!(err, PlanError::StudentNotFound);

        let student = lock(&plans.store).get_students()[0].clone();
        let err = plans
            .activate_student_plan(ActivatePlanDto {
                student_id: student.id,
                plan_id: Uuid::new_v4(),
                start_date: Utc::now(),
                included_classes: None,
            })
            .unwrap_err();
        assert_eq!(err, PlanError::PlanNotFound);
    }

    #[test]
    fn freeze_extends_the_end_date_by_the_ceiling_of_the_window() {
        let plans = usecase();
        let active = lock(&plans.store).get_student_plans()[0].clone();
        let start = Utc::now();
        // 4 days and 6 hours rounds up to 5 whole days
        let end = start + Duration::days(4) + Duration::hours(6);

        let frozen = plans
            .freeze_student_plan(FreezePlanDto {
                student_plan_id: active.id,
                start_date: start,
                end_date: end,
                reason: Some("Vacaciones".to_string()),
            })
            .unwrap()
            .data
            .unwrap();

        assert_eq!(frozen.status, StudentPlanStatus::Frozen);
        assert_eq!(frozen.end_date, active.end_date + Duration::days(5));
        let periods = frozen.frozen_periods.unwrap();
        assert_eq!(periods.len(), 1);
        assert_eq!(periods[0].reason.as_deref(), Some("Vacaciones"));
    }

    #[test]
    fn freeze_rejects_non_active_plans() {
        let plans = usecase();
        let active = lock(&plans.store).get_student_plans()[0].clone();

        plans
            .cancel_student_plan(CancelPlanDto {
                student_plan_id: active.id,
                reason: "Prueba".to_string(),
            })
            .unwrap();

        let err = plans
            .freeze_student_plan(FreezePlanDto {
                student_plan_id: active.id,
                start_date: Utc::now(),
                end_date: Utc::now() + Duration::days(3),
                reason: None,
            })
            .unwrap_err();
        assert_eq!(err, PlanError::OnlyActivePlansCanBeFrozen);
    }

    #[test]
    fn cancel_records_the_reason_and_rejects_a_second_cancel() {
        let plans = usecase();
        let active = lock(&plans.store).get_student_plans()[0].clone();

        let cancelled = plans
            .cancel_student_plan(CancelPlanDto {
                student_plan_id: active.id,
                reason: "Cambio de ciudad".to_string(),
            })
            .unwrap()
            .data
            .unwrap();
        assert_eq!(cancelled.status, StudentPlanStatus::Canceled);
        assert_eq!(
            cancelled.reason_cancellation.as_deref(),
            Some("Cambio de ciudad")
        );

        let err = plans
            .cancel_student_plan(CancelPlanDto {
                student_plan_id: active.id,
                reason: "Otra vez".to_string(),
            })
            .unwrap_err();
        assert_eq!(err, PlanError::AlreadyCanceled);
    }

    #[test]
    fn list_plans_filters_by_search_term() {
        let plans = usecase();
        let page = plans.list_plans(
            None,
            Some(PlanFilters {
                search: Some("zumba".to_string()),
                status: None,
            }),
        );
        assert_eq!(page.total, 1);
        assert_eq!(page.data[0].name, "Plan Zumba Mensual");
    }

    #[test]
    fn statistics_reflect_seed_data() {
        let plans = usecase();
        let stats = plans.plan_statistics();
        assert_eq!(stats.total_plans, 4);
        assert_eq!(stats.active_plans, 4);
        assert_eq!(stats.total_assignments, 3);
        assert_eq!(stats.active_assignments, 3);
        assert_eq!(stats.estimated_revenue, 150000);
    }
}
