mod seed;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::domain::{
    entities::{
        instructors::Instructor,
        notifications::Notification,
        plans::{Plan, PlanType},
        reservations::Reservation,
        schedules::Schedule,
        student_plans::StudentPlan,
        students::Student,
        users::User,
    },
    value_objects::{
        auth::MockCredential,
        enums::{
            instructor_statuses::InstructorStatus, plan_statuses::PlanStatus,
            reservation_statuses::ReservationStatus,
            student_plan_statuses::StudentPlanStatus, student_statuses::StudentStatus,
            user_roles::UserRole,
        },
        instructors::{CreateInstructorDto, InstructorPatch},
        notifications::{CreateNotificationDto, NotificationPatch},
        plans::{CreatePlanDto, CreatePlanTypeDto, PlanPatch},
        reservations::{CreateReservationDto, ReservationPatch},
        schedules::{CreateScheduleDto, SchedulePatch},
        student_plans::{NewStudentPlan, StudentPlanPatch},
        students::{CreateStudentDto, StudentPatch},
    },
};
use crate::infrastructure::storage::snapshot::SnapshotStore;

/// Serialized form of the whole store. Every collection is optional so an
/// older or partial snapshot overlays only what it actually carries; plan
/// types are deliberately not part of the snapshot.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Snapshot {
    plans: Option<Vec<Plan>>,
    schedules: Option<Vec<Schedule>>,
    students: Option<Vec<Student>>,
    instructors: Option<Vec<Instructor>>,
    student_plans: Option<Vec<StudentPlan>>,
    reservations: Option<Vec<Reservation>>,
    notifications: Option<Vec<Notification>>,
    users: Option<Vec<User>>,
}

/// Canonical in-memory collections for every entity type. All reads hand out
/// clones, never references into the arrays; every mutation writes a full
/// snapshot through the injected [`SnapshotStore`], best-effort.
///
/// The store is a plain value: construct one per process (or per test) and
/// share it behind `Arc<Mutex<_>>`.
pub struct DataStore {
    plans: Vec<Plan>,
    plan_types: Vec<PlanType>,
    schedules: Vec<Schedule>,
    students: Vec<Student>,
    instructors: Vec<Instructor>,
    student_plans: Vec<StudentPlan>,
    reservations: Vec<Reservation>,
    notifications: Vec<Notification>,
    users: Vec<User>,
    passwords: HashMap<UserRole, String>,
    credentials: Vec<MockCredential>,
    snapshots: Box<dyn SnapshotStore>,
}

impl DataStore {
    /// Builds the store from the built-in seed, then overlays whatever the
    /// snapshot store has. A missing, unreadable or corrupt snapshot leaves
    /// the seed in place; those failures are logged and never escalated.
    pub fn new(snapshots: Box<dyn SnapshotStore>) -> Self {
        let seed = seed::seed();
        let mut store = Self {
            plans: seed.plans,
            plan_types: seed.plan_types,
            schedules: seed.schedules,
            students: seed.students,
            instructors: seed.instructors,
            student_plans: seed.student_plans,
            reservations: seed.reservations,
            notifications: seed.notifications,
            users: seed.users,
            passwords: seed.passwords,
            credentials: seed.credentials,
            snapshots,
        };
        store.load_snapshot();
        store
    }

    fn load_snapshot(&mut self) {
        let payload = match self.snapshots.load() {
            Ok(Some(payload)) => payload,
            Ok(None) => return,
            Err(err) => {
                warn!(error = ?err, "failed to load store snapshot, keeping seed data");
                return;
            }
        };

        match serde_json::from_str::<Snapshot>(&payload) {
            Ok(snapshot) => {
                if let Some(plans) = snapshot.plans {
                    self.plans = plans;
                }
                if let Some(schedules) = snapshot.schedules {
                    self.schedules = schedules;
                }
                if let Some(students) = snapshot.students {
                    self.students = students;
                }
                if let Some(instructors) = snapshot.instructors {
                    self.instructors = instructors;
                }
                if let Some(student_plans) = snapshot.student_plans {
                    self.student_plans = student_plans;
                }
                if let Some(reservations) = snapshot.reservations {
                    self.reservations = reservations;
                }
                if let Some(notifications) = snapshot.notifications {
                    self.notifications = notifications;
                }
                if let Some(users) = snapshot.users {
                    self.users = users;
                }
            }
            Err(err) => {
                warn!(error = ?err, "store snapshot is corrupt, keeping seed data");
            }
        }
    }

    /// Best-effort write of the whole store. In-memory state stays
    /// authoritative even when the snapshot store is unavailable.
    fn persist(&self) {
        let snapshot = Snapshot {
            plans: Some(self.plans.clone()),
            schedules: Some(self.schedules.clone()),
            students: Some(self.students.clone()),
            instructors: Some(self.instructors.clone()),
            student_plans: Some(self.student_plans.clone()),
            reservations: Some(self.reservations.clone()),
            notifications: Some(self.notifications.clone()),
            users: Some(self.users.clone()),
        };

        match serde_json::to_string(&snapshot) {
            Ok(payload) => {
                if let Err(err) = self.snapshots.save(&payload) {
                    warn!(error = ?err, "failed to persist store snapshot");
                }
            }
            Err(err) => warn!(error = ?err, "failed to serialize store snapshot"),
        }
    }

    // Full-collection reads

    pub fn get_plans(&self) -> Vec<Plan> {
        self.plans.clone()
    }

    pub fn get_plan_types(&self) -> Vec<PlanType> {
        self.plan_types.clone()
    }

    pub fn get_schedules(&self) -> Vec<Schedule> {
        self.schedules.clone()
    }

    pub fn get_students(&self) -> Vec<Student> {
        self.students.clone()
    }

    pub fn get_instructors(&self) -> Vec<Instructor> {
        self.instructors.clone()
    }

    pub fn get_student_plans(&self) -> Vec<StudentPlan> {
        self.student_plans.clone()
    }

    pub fn get_reservations(&self) -> Vec<Reservation> {
        self.reservations.clone()
    }

    pub fn get_notifications(&self) -> Vec<Notification> {
        self.notifications.clone()
    }

    pub fn get_users(&self) -> Vec<User> {
        self.users.clone()
    }

    pub fn get_mock_passwords(&self) -> HashMap<UserRole, String> {
        self.passwords.clone()
    }

    pub fn get_mock_credentials(&self) -> Vec<MockCredential> {
        self.credentials.clone()
    }

    // By-id reads

    pub fn get_plan_by_id(&self, id: Uuid) -> Option<Plan> {
        self.plans.iter().find(|plan| plan.id == id).cloned()
    }

    pub fn get_schedule_by_id(&self, id: Uuid) -> Option<Schedule> {
        self.schedules
            .iter()
            .find(|schedule| schedule.id == id)
            .cloned()
    }

    pub fn get_student_by_id(&self, id: Uuid) -> Option<Student> {
        self.students.iter().find(|student| student.id == id).cloned()
    }

    pub fn get_instructor_by_id(&self, id: Uuid) -> Option<Instructor> {
        self.instructors
            .iter()
            .find(|instructor| instructor.id == id)
            .cloned()
    }

    pub fn get_student_plan_by_id(&self, id: Uuid) -> Option<StudentPlan> {
        self.student_plans.iter().find(|sp| sp.id == id).cloned()
    }

    pub fn get_reservation_by_id(&self, id: Uuid) -> Option<Reservation> {
        self.reservations
            .iter()
            .find(|reservation| reservation.id == id)
            .cloned()
    }

    pub fn get_notification_by_id(&self, id: Uuid) -> Option<Notification> {
        self.notifications
            .iter()
            .find(|notification| notification.id == id)
            .cloned()
    }

    // Inserts

    pub fn add_plan_type(&mut self, dto: CreatePlanTypeDto) -> PlanType {
        let plan_type = PlanType {
            id: Uuid::new_v4(),
            name: dto.name,
            format: dto.format,
        };
        self.plan_types.push(plan_type.clone());
        self.persist();
        plan_type
    }

    pub fn add_plan(&mut self, dto: CreatePlanDto, status: PlanStatus) -> Plan {
        let now = Utc::now();
        let plan = Plan {
            id: Uuid::new_v4(),
            name: dto.name,
            plan_types: dto.plan_types,
            description: dto.description,
            duration_days: dto.duration_days,
            included_classes: dto.included_classes,
            price: dto.price,
            status,
            creation_date: now,
            last_modified_date: now,
            documents: dto.documents,
            images: dto.images,
        };
        self.plans.push(plan.clone());
        self.persist();
        plan
    }

    pub fn add_student(&mut self, dto: CreateStudentDto, status: StudentStatus) -> Student {
        let student = Student {
            id: Uuid::new_v4(),
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            phone: dto.phone,
            birth_date: dto.birth_date,
            registration_date: Utc::now(),
            status,
        };
        self.students.push(student.clone());
        self.persist();
        student
    }

    pub fn add_instructor(
        &mut self,
        dto: CreateInstructorDto,
        status: InstructorStatus,
    ) -> Instructor {
        let instructor = Instructor {
            id: Uuid::new_v4(),
            name: dto.name,
            last_name: dto.last_name,
            email: dto.email,
            phone: dto.phone,
            specialties: dto.specialties,
            biography: dto.biography,
            photo: dto.photo,
            status,
        };
        self.instructors.push(instructor.clone());
        self.persist();
        instructor
    }

    pub fn add_student_plan(&mut self, new_plan: NewStudentPlan) -> StudentPlan {
        let student_plan = StudentPlan {
            id: Uuid::new_v4(),
            student_id: new_plan.student_id,
            plan_id: new_plan.plan_id,
            start_date: new_plan.start_date,
            end_date: new_plan.end_date,
            remaining_classes: new_plan.remaining_classes,
            status: new_plan.status,
            reason_cancellation: None,
            frozen_periods: None,
        };
        self.student_plans.push(student_plan.clone());
        self.persist();
        student_plan
    }

    pub fn add_reservation(&mut self, dto: CreateReservationDto) -> Reservation {
        let reservation = Reservation {
            id: Uuid::new_v4(),
            student_id: dto.student_id,
            schedule_id: dto.schedule_id,
            date: dto.date,
            status: ReservationStatus::Scheduled,
            reservation_date: Utc::now(),
            cancellation_date: None,
        };
        self.reservations.push(reservation.clone());
        self.persist();
        reservation
    }

    pub fn add_schedule(&mut self, dto: CreateScheduleDto) -> Schedule {
        let schedule = Schedule {
            id: Uuid::new_v4(),
            day_of_week: dto.day_of_week,
            start_time: dto.start_time,
            end_time: dto.end_time,
            max_capacity: dto.max_capacity,
            instructor_id: dto.instructor_id,
            class_type: dto.class_type,
            room: dto.room,
            description: dto.description,
        };
        self.schedules.push(schedule.clone());
        self.persist();
        schedule
    }

    pub fn add_notification(&mut self, dto: CreateNotificationDto) -> Notification {
        let notification = Notification {
            id: Uuid::new_v4(),
            student_id: dto.student_id,
            notification_type: dto.notification_type,
            title: dto.title,
            message: dto.message,
            creation_date: Utc::now(),
            sending_date: None,
            read: false,
            action_required: dto.action_required,
            data: dto.data,
        };
        self.notifications.push(notification.clone());
        self.persist();
        notification
    }

    // Partial updates. `None` means the id had no match; the caller decides
    // how to surface that.

    pub fn update_plan(&mut self, id: Uuid, patch: PlanPatch) -> Option<Plan> {
        let plan = self.plans.iter_mut().find(|plan| plan.id == id)?;

        if let Some(name) = patch.name {
            plan.name = name;
        }
        if let Some(plan_types) = patch.plan_types {
            plan.plan_types = plan_types;
        }
        if let Some(description) = patch.description {
            plan.description = description;
        }
        if let Some(duration_days) = patch.duration_days {
            plan.duration_days = duration_days;
        }
        if let Some(included_classes) = patch.included_classes {
            plan.included_classes = included_classes;
        }
        if let Some(price) = patch.price {
            plan.price = price;
        }
        if let Some(status) = patch.status {
            plan.status = status;
        }
        if let Some(documents) = patch.documents {
            plan.documents = Some(documents);
        }
        if let Some(images) = patch.images {
            plan.images = Some(images);
        }
        plan.last_modified_date = Utc::now();

        let updated = plan.clone();
        self.persist();
        Some(updated)
    }

    pub fn update_student(&mut self, id: Uuid, patch: StudentPatch) -> Option<Student> {
        let student = self.students.iter_mut().find(|student| student.id == id)?;

        if let Some(first_name) = patch.first_name {
            student.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            student.last_name = last_name;
        }
        if let Some(email) = patch.email {
            student.email = email;
        }
        if let Some(phone) = patch.phone {
            student.phone = phone;
        }
        if let Some(birth_date) = patch.birth_date {
            student.birth_date = birth_date;
        }
        if let Some(status) = patch.status {
            student.status = status;
        }

        let updated = student.clone();
        self.persist();
        Some(updated)
    }

    pub fn update_instructor(&mut self, id: Uuid, patch: InstructorPatch) -> Option<Instructor> {
        let instructor = self
            .instructors
            .iter_mut()
            .find(|instructor| instructor.id == id)?;

        if let Some(name) = patch.name {
            instructor.name = name;
        }
        if let Some(last_name) = patch.last_name {
            instructor.last_name = last_name;
        }
        if let Some(email) = patch.email {
            instructor.email = email;
        }
        if let Some(phone) = patch.phone {
            instructor.phone = phone;
        }
        if let Some(specialties) = patch.specialties {
            instructor.specialties = specialties;
        }
        if let Some(biography) = patch.biography {
            instructor.biography = biography;
        }
        if let Some(photo) = patch.photo {
            instructor.photo = Some(photo);
        }
        if let Some(status) = patch.status {
            instructor.status = status;
        }

        let updated = instructor.clone();
        self.persist();
        Some(updated)
    }

    pub fn update_student_plan(
        &mut self,
        id: Uuid,
        patch: StudentPlanPatch,
    ) -> Option<StudentPlan> {
        let student_plan = self.student_plans.iter_mut().find(|sp| sp.id == id)?;

        if let Some(start_date) = patch.start_date {
            student_plan.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            student_plan.end_date = end_date;
        }
        if let Some(remaining_classes) = patch.remaining_classes {
            student_plan.remaining_classes = remaining_classes;
        }
        if let Some(status) = patch.status {
            student_plan.status = status;
        }
        if let Some(reason) = patch.reason_cancellation {
            student_plan.reason_cancellation = Some(reason);
        }
        if let Some(frozen_periods) = patch.frozen_periods {
            student_plan.frozen_periods = Some(frozen_periods);
        }

        let updated = student_plan.clone();
        self.persist();
        Some(updated)
    }

    pub fn update_reservation(
        &mut self,
        id: Uuid,
        patch: ReservationPatch,
    ) -> Option<Reservation> {
        let reservation = self
            .reservations
            .iter_mut()
            .find(|reservation| reservation.id == id)?;

        if let Some(date) = patch.date {
            reservation.date = date;
        }
        if let Some(status) = patch.status {
            reservation.status = status;
        }
        if let Some(cancellation_date) = patch.cancellation_date {
            reservation.cancellation_date = Some(cancellation_date);
        }

        let updated = reservation.clone();
        self.persist();
        Some(updated)
    }

    pub fn update_schedule(&mut self, id: Uuid, patch: SchedulePatch) -> Option<Schedule> {
        let schedule = self
            .schedules
            .iter_mut()
            .find(|schedule| schedule.id == id)?;

        if let Some(day_of_week) = patch.day_of_week {
            schedule.day_of_week = day_of_week;
        }
        if let Some(start_time) = patch.start_time {
            schedule.start_time = start_time;
        }
        if let Some(end_time) = patch.end_time {
            schedule.end_time = end_time;
        }
        if let Some(max_capacity) = patch.max_capacity {
            schedule.max_capacity = max_capacity;
        }
        if let Some(instructor_id) = patch.instructor_id {
            schedule.instructor_id = instructor_id;
        }
        if let Some(class_type) = patch.class_type {
            schedule.class_type = class_type;
        }
        if let Some(room) = patch.room {
            schedule.room = room;
        }
        if let Some(description) = patch.description {
            schedule.description = description;
        }

        let updated = schedule.clone();
        self.persist();
        Some(updated)
    }

    pub fn update_notification(
        &mut self,
        id: Uuid,
        patch: NotificationPatch,
    ) -> Option<Notification> {
        let notification = self
            .notifications
            .iter_mut()
            .find(|notification| notification.id == id)?;

        if let Some(read) = patch.read {
            notification.read = read;
        }

        let updated = notification.clone();
        self.persist();
        Some(updated)
    }

    // Deletes

    /// Refused while any student holds this plan in `Active` status.
    pub fn delete_plan(&mut self, id: Uuid) -> bool {
        let Some(index) = self.plans.iter().position(|plan| plan.id == id) else {
            return false;
        };

        if self.plan_has_active_students(id) {
            return false;
        }

        self.plans.remove(index);
        self.persist();
        true
    }

    /// Refused while the student holds an `Active` plan.
    pub fn delete_student(&mut self, id: Uuid) -> bool {
        let Some(index) = self.students.iter().position(|student| student.id == id) else {
            return false;
        };

        if self.student_has_active_plan(id) {
            return false;
        }

        self.students.remove(index);
        self.persist();
        true
    }

    pub fn delete_instructor(&mut self, id: Uuid) -> bool {
        let Some(index) = self
            .instructors
            .iter()
            .position(|instructor| instructor.id == id)
        else {
            return false;
        };

        self.instructors.remove(index);
        self.persist();
        true
    }

    pub fn delete_reservation(&mut self, id: Uuid) -> bool {
        let Some(index) = self
            .reservations
            .iter()
            .position(|reservation| reservation.id == id)
        else {
            return false;
        };

        self.reservations.remove(index);
        self.persist();
        true
    }

    pub fn delete_schedule(&mut self, id: Uuid) -> bool {
        let Some(index) = self
            .schedules
            .iter()
            .position(|schedule| schedule.id == id)
        else {
            return false;
        };

        self.schedules.remove(index);
        self.persist();
        true
    }

    pub fn delete_notification(&mut self, id: Uuid) -> bool {
        let Some(index) = self
            .notifications
            .iter()
            .position(|notification| notification.id == id)
        else {
            return false;
        };

        self.notifications.remove(index);
        self.persist();
        true
    }

    // Business reads

    pub fn plan_has_active_students(&self, plan_id: Uuid) -> bool {
        self.student_plans
            .iter()
            .any(|sp| sp.plan_id == plan_id && sp.status == StudentPlanStatus::Active)
    }

    pub fn student_has_active_plan(&self, student_id: Uuid) -> bool {
        self.student_plans
            .iter()
            .any(|sp| sp.student_id == student_id && sp.status == StudentPlanStatus::Active)
    }

    pub fn student_active_plan(&self, student_id: Uuid) -> Option<StudentPlan> {
        self.student_plans
            .iter()
            .find(|sp| sp.student_id == student_id && sp.status == StudentPlanStatus::Active)
            .cloned()
    }

    pub fn student_future_reservations(&self, student_id: Uuid) -> Vec<Reservation> {
        let today = Utc::now();
        self.reservations
            .iter()
            .filter(|reservation| {
                reservation.student_id == student_id
                    && reservation.date > today
                    && reservation.status == ReservationStatus::Scheduled
            })
            .cloned()
            .collect()
    }

    /// Count of seats already taken for one schedule occurrence. Only
    /// `Scheduled` reservations on the same calendar day count.
    pub fn scheduled_count(&self, schedule_id: Uuid, date: DateTime<Utc>) -> usize {
        self.reservations
            .iter()
            .filter(|reservation| {
                reservation.schedule_id == schedule_id
                    && reservation.date.date_naive() == date.date_naive()
                    && reservation.status == ReservationStatus::Scheduled
            })
            .count()
    }

    /// Whether the schedule occurrence on `date` can take another
    /// reservation. An unknown schedule is simply not available.
    pub fn check_availability(&self, schedule_id: Uuid, date: DateTime<Utc>) -> bool {
        let Some(schedule) = self.get_schedule_by_id(schedule_id) else {
            return false;
        };

        (self.scheduled_count(schedule_id, date) as u32) < schedule.max_capacity
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::value_objects::enums::plan_formats::PlanFormat;
    use crate::infrastructure::storage::snapshot::{MemorySnapshotStore, MockSnapshotStore};

    fn store() -> DataStore {
        DataStore::new(Box::new(MemorySnapshotStore::default()))
    }

    fn sample_plan_dto(name: &str) -> CreatePlanDto {
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
    fn seed_data_is_loaded_when_no_snapshot_exists() {
        let store = store();
        assert_eq!(store.get_plans().len(), 4);
        assert_eq!(store.get_students().len(), 3);
        assert_eq!(store.get_instructors().len(), 3);
        assert_eq!(store.get_schedules().len(), 6);
        assert_eq!(store.get_student_plans().len(), 3);
        assert_eq!(store.get_reservations().len(), 2);
        assert_eq!(store.get_users().len(), 4);
    }

    #[test]
    fn add_plan_assigns_id_and_timestamps() {
        let mut store = store();
        let plan = store.add_plan(sample_plan_dto("Plan Nuevo"), PlanStatus::Active);

        let found = store.get_plan_by_id(plan.id).unwrap();
        assert_eq!(found.name, "Plan Nuevo");
        assert_eq!(found.creation_date, found.last_modified_date);
    }

    #[test]
    fn update_plan_refreshes_last_modified_date() {
        let mut store = store();
        let plan = store.add_plan(sample_plan_dto("Plan Nuevo"), PlanStatus::Active);

        let updated = store
            .update_plan(
                plan.id,
                PlanPatch {
                    price: Some(50000),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.price, 50000);
        assert!(updated.last_modified_date >= plan.last_modified_date);
        // untouched fields survive the merge
        assert_eq!(updated.name, plan.name);
    }

    #[test]
    fn update_with_unknown_id_returns_none() {
        let mut store = store();
        assert!(store.update_plan(Uuid::new_v4(), PlanPatch::default()).is_none());
        assert!(store
            .update_student(Uuid::new_v4(), StudentPatch::default())
            .is_none());
        assert!(store
            .update_student_plan(Uuid::new_v4(), StudentPlanPatch::default())
            .is_none());
    }

    #[test]
    fn delete_plan_is_refused_while_a_student_holds_it_active() {
        let mut store = store();
        let held_plan = store.get_student_plans()[0].plan_id;

        assert!(!store.delete_plan(held_plan));
        assert!(store.get_plan_by_id(held_plan).is_some());
    }

    #[test]
    fn delete_plan_succeeds_once_no_active_references_remain() {
        let mut store = store();
        let held = store.get_student_plans()[0].clone();

        store
            .update_student_plan(
                held.id,
                StudentPlanPatch {
                    status: Some(StudentPlanStatus::Canceled),
                    ..Default::default()
                },
            )
            .unwrap();

        assert!(store.delete_plan(held.plan_id));
        assert!(store.get_plan_by_id(held.plan_id).is_none());
        assert!(!store.get_plans().iter().any(|p| p.id == held.plan_id));
    }

    #[test]
    fn delete_student_is_refused_while_their_plan_is_active() {
        let mut store = store();
        let student_id = store.get_student_plans()[0].student_id;

        assert!(!store.delete_student(student_id));
        assert!(store.get_student_by_id(student_id).is_some());
    }

    #[test]
    fn check_availability_counts_only_scheduled_reservations_on_the_day() {
        let mut store = store();
        // seed: personalized training room, capacity 1, no reservations
        let slot = store
            .get_schedules()
            .into_iter()
            .find(|s| s.max_capacity == 1)
            .unwrap();
        let student = store.get_students()[0].clone();
        let date = NaiveDate::from_ymd_opt(2024, 8, 7)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
            .and_utc();

        assert!(store.check_availability(slot.id, date));

        let reservation = store.add_reservation(CreateReservationDto {
            student_id: student.id,
            schedule_id: slot.id,
            date,
        });
        assert!(!store.check_availability(slot.id, date));
        // other days are unaffected
        assert!(store.check_availability(slot.id, date + chrono::Duration::days(7)));

        store
            .update_reservation(
                reservation.id,
                ReservationPatch {
                    status: Some(ReservationStatus::Cancelled),
                    cancellation_date: Some(Utc::now()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(store.check_availability(slot.id, date));
    }

    #[test]
    fn check_availability_for_unknown_schedule_is_false() {
        let store = store();
        assert!(!store.check_availability(Uuid::new_v4(), Utc::now()));
    }

    #[test]
    fn snapshot_round_trips_identically_through_a_shared_backend() {
        let backend = MemorySnapshotStore::default();
        let mut first = DataStore::new(Box::new(backend.clone()));

        first.add_plan(sample_plan_dto("Plan Persistido"), PlanStatus::Inactive);
        first.add_plan_type(CreatePlanTypeDto {
            name: "FUNCIONAL".to_string(),
            format: PlanFormat::InPerson,
        });

        let second = DataStore::new(Box::new(backend));
        assert_eq!(second.get_plans(), first.get_plans());
        assert_eq!(second.get_students(), first.get_students());
        assert_eq!(second.get_student_plans(), first.get_student_plans());
        assert_eq!(second.get_reservations(), first.get_reservations());
        assert_eq!(second.get_users(), first.get_users());
    }

    #[test]
    fn corrupt_snapshot_falls_back_to_seed() {
        let backend = MemorySnapshotStore::default();
        backend.save("this is not json").unwrap();

        let store = DataStore::new(Box::new(backend));
        assert_eq!(store.get_plans().len(), 4);
    }

    #[test]
    fn partial_snapshot_overlays_only_what_it_carries() {
        let backend = MemorySnapshotStore::default();
        backend.save("{\"students\":[]}").unwrap();

        let store = DataStore::new(Box::new(backend));
        assert!(store.get_students().is_empty());
        // collections missing from the snapshot keep their seed
        assert_eq!(store.get_plans().len(), 4);
    }

    #[test]
    fn mutation_succeeds_even_when_persistence_fails() {
        let mut snapshots = MockSnapshotStore::new();
        snapshots.expect_load().returning(|| Ok(None));
        snapshots
            .expect_save()
            .returning(|_| Err(anyhow::anyhow!("storage unavailable")));

        let mut store = DataStore::new(Box::new(snapshots));
        let plan = store.add_plan(sample_plan_dto("Plan Sin Disco"), PlanStatus::Active);
        assert!(store.get_plan_by_id(plan.id).is_some());
    }
}
