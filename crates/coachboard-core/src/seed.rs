//! Seeded record store
//!
//! In-memory stand-in for the coaching platform backend: one fixed, ordered
//! collection per domain, built once behind a `Lazy` and immutable for the
//! session. Ordering matters - derived views preserve it.

use crate::models::*;
use crate::store::DataStore;
use once_cell::sync::Lazy;

static STORE: Lazy<DataStore> = Lazy::new(build_store);

/// The seeded store shared by the TUI and the CLI.
pub fn store() -> &'static DataStore {
    &STORE
}

fn build_store() -> DataStore {
    DataStore {
        clients: clients(),
        appointments: appointments(),
        leads: leads(),
        follow_ups: follow_ups(),
        checkins: checkins(),
        quick_view_checkins: quick_view_checkins(),
        submitted_checkins: submitted_checkins(),
        upcoming_checkins: upcoming_checkins(),
        unsubmitted_checkins: unsubmitted_checkins(),
        reminders: reminders(),
        reminder_types: reminder_types(),
        workout_requests: workout_requests(),
        diet_requests: diet_requests(),
        lead_responses: lead_responses(),
        referrers: referrers(),
        notifications: notifications(),
        metrics: dashboard_metrics(),
    }
}

fn client(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    status: ClientStatus,
    join_date: &str,
    program: Option<&str>,
) -> Client {
    Client {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        status,
        join_date: join_date.to_string(),
        program: program.map(str::to_string),
        avatar: None,
    }
}

fn clients() -> Vec<Client> {
    vec![
        client(
            "1",
            "Sarah Johnson",
            "sarah.johnson@email.com",
            "+1 (555) 123-4567",
            ClientStatus::Active,
            "2024-01-15",
            Some("Weight Loss Program"),
        ),
        client(
            "2",
            "Mike Chen",
            "mike.chen@email.com",
            "+1 (555) 234-5678",
            ClientStatus::Active,
            "2024-02-20",
            Some("Strength Training"),
        ),
        client(
            "3",
            "Emma Davis",
            "emma.davis@email.com",
            "+1 (555) 345-6789",
            ClientStatus::Pending,
            "2024-08-20",
            Some("Nutrition Coaching"),
        ),
        client(
            "4",
            "David Wilson",
            "david.wilson@email.com",
            "+1 (555) 456-7891",
            ClientStatus::Active,
            "2024-03-02",
            Some("Cardio Program"),
        ),
        client(
            "5",
            "Lisa Anderson",
            "lisa.anderson@email.com",
            "+1 (555) 567-8902",
            ClientStatus::OnHold,
            "2024-04-11",
            Some("Group Classes"),
        ),
        client(
            "6",
            "Robert Brown",
            "robert.brown@email.com",
            "+1 (555) 678-9013",
            ClientStatus::Expired,
            "2023-11-08",
            Some("Personal Training"),
        ),
        client(
            "7",
            "Maria Garcia",
            "maria.garcia@email.com",
            "+1 (555) 789-0124",
            ClientStatus::Active,
            "2024-05-19",
            Some("Strength Training"),
        ),
        client(
            "8",
            "James Taylor",
            "james.taylor@email.com",
            "+1 (555) 890-1235",
            ClientStatus::Prestart,
            "2024-08-22",
            Some("Weight Loss Program"),
        ),
        client(
            "9",
            "Amanda White",
            "amanda.white@email.com",
            "+1 (555) 901-2346",
            ClientStatus::Active,
            "2024-06-30",
            Some("HIIT Program"),
        ),
        client(
            "10",
            "Christopher Lee",
            "christopher.lee@email.com",
            "+1 (555) 012-3457",
            ClientStatus::Refunded,
            "2024-02-05",
            None,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn appointment(
    id: &str,
    client_id: &str,
    client_name: &str,
    date: &str,
    time: &str,
    duration_minutes: u32,
    kind: AppointmentType,
    status: AppointmentStatus,
    coach: &str,
    notes: Option<&str>,
) -> Appointment {
    Appointment {
        id: id.to_string(),
        client_id: client_id.to_string(),
        client_name: client_name.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        duration_minutes,
        kind,
        status,
        notes: notes.map(str::to_string),
        coach: coach.to_string(),
    }
}

fn appointments() -> Vec<Appointment> {
    use AppointmentStatus::*;
    use AppointmentType::*;
    vec![
        appointment("1", "1", "Sarah Johnson", "2024-08-26", "09:00", 60, Training, Scheduled, "Alex Rodriguez", Some("Focus on lower body strength")),
        appointment("2", "2", "Mike Chen", "2024-08-26", "14:30", 45, Consultation, Scheduled, "Jessica Smith", Some("Initial consultation for new program")),
        appointment("3", "3", "Emma Davis", "2024-08-27", "10:00", 30, Assessment, Scheduled, "Alex Rodriguez", Some("Body composition assessment")),
        appointment("4", "1", "Sarah Johnson", "2024-08-28", "16:00", 60, Training, Scheduled, "Alex Rodriguez", None),
        appointment("5", "2", "Mike Chen", "2024-08-25", "11:00", 60, Training, Completed, "Jessica Smith", Some("Great progress on bench press")),
        appointment("6", "4", "David Wilson", "2024-08-26", "08:00", 45, Training, Completed, "Alex Rodriguez", Some("Cardio session completed")),
        appointment("7", "5", "Lisa Anderson", "2024-08-26", "12:00", 60, Consultation, Cancelled, "Jessica Smith", Some("Client requested reschedule")),
        appointment("8", "6", "Robert Brown", "2024-08-26", "15:00", 30, Assessment, NoShow, "Alex Rodriguez", Some("Client did not show up")),
        appointment("9", "7", "Maria Garcia", "2024-08-27", "07:30", 60, Training, Scheduled, "Jessica Smith", Some("Morning strength training")),
        appointment("10", "8", "James Taylor", "2024-08-27", "13:00", 45, FollowUp, Scheduled, "Alex Rodriguez", Some("Progress review and program adjustment")),
        appointment("11", "9", "Amanda White", "2024-08-27", "17:00", 60, Training, Scheduled, "Jessica Smith", Some("HIIT training session")),
        appointment("12", "10", "Christopher Lee", "2024-08-28", "09:30", 30, Assessment, Scheduled, "Alex Rodriguez", Some("Fitness assessment for new client")),
        appointment("13", "3", "Emma Davis", "2024-08-28", "11:00", 60, Consultation, Scheduled, "Jessica Smith", Some("Nutrition consultation")),
        appointment("14", "4", "David Wilson", "2024-08-28", "14:00", 45, Training, Scheduled, "Alex Rodriguez", Some("Recovery and mobility work")),
        appointment("15", "7", "Maria Garcia", "2024-08-29", "08:00", 60, Training, Scheduled, "Jessica Smith", Some("Strength training - upper body focus")),
    ]
}

#[allow(clippy::too_many_arguments)]
fn lead(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    status: LeadStatus,
    source: LeadSource,
    assigned_to: Option<&str>,
    created_at: &str,
    last_contact: Option<&str>,
    category: &str,
    notes: &str,
) -> Lead {
    Lead {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        status,
        source,
        assigned_to: assigned_to.map(str::to_string),
        created_at: created_at.to_string(),
        last_contact: last_contact.map(str::to_string),
        notes: Some(notes.to_string()),
        category: category.to_string(),
    }
}

fn leads() -> Vec<Lead> {
    vec![
        lead("1", "Jennifer Wilson", "jennifer.wilson@email.com", "+1 (555) 987-6543", LeadStatus::New, LeadSource::Website, None, "2024-08-25", None, "Weight Loss", "Interested in 3-month program"),
        lead("2", "David Brown", "david.brown@email.com", "+1 (555) 876-5432", LeadStatus::Contacted, LeadSource::Referral, Some("Alex Rodriguez"), "2024-08-24", Some("2024-08-25"), "Strength Training", "Referred by Sarah Johnson, looking for strength training"),
        lead("3", "Lisa Anderson", "lisa.anderson@email.com", "+1 (555) 765-4321", LeadStatus::Qualified, LeadSource::Social, Some("Jessica Smith"), "2024-08-23", Some("2024-08-24"), "Nutrition", "Ready to start nutrition program next week"),
        lead("4", "Robert Taylor", "robert.taylor@email.com", "+1 (555) 654-3210", LeadStatus::Converted, LeadSource::Ads, Some("Alex Rodriguez"), "2024-08-20", Some("2024-08-22"), "Personal Training", "Signed up for 6-month personal training package"),
        lead("5", "Michelle Garcia", "michelle.garcia@email.com", "+1 (555) 543-2109", LeadStatus::Lost, LeadSource::Website, Some("Jessica Smith"), "2024-08-18", Some("2024-08-20"), "Group Classes", "Decided to go with another gym"),
    ]
}

fn follow_ups() -> Vec<FollowUp> {
    let follow_up = |id: &str,
                     client_id: &str,
                     client_name: &str,
                     kind: FollowUpKind,
                     priority: Priority,
                     due_date: &str,
                     status: FollowUpStatus,
                     description: &str,
                     assigned_to: &str,
                     created_at: &str| FollowUp {
        id: id.to_string(),
        client_id: client_id.to_string(),
        client_name: client_name.to_string(),
        kind,
        priority,
        due_date: due_date.to_string(),
        status,
        description: description.to_string(),
        assigned_to: assigned_to.to_string(),
        created_at: created_at.to_string(),
    };
    vec![
        follow_up("1", "1", "Sarah Johnson", FollowUpKind::CheckIn, Priority::Medium, "2024-08-27", FollowUpStatus::Pending, "Weekly progress check-in and measurements", "Alex Rodriguez", "2024-08-20"),
        follow_up("2", "2", "Mike Chen", FollowUpKind::ProgramUpdate, Priority::High, "2024-08-26", FollowUpStatus::Overdue, "Update workout program based on recent progress", "Jessica Smith", "2024-08-15"),
        follow_up("3", "3", "Emma Davis", FollowUpKind::Assessment, Priority::High, "2024-08-28", FollowUpStatus::Pending, "Initial fitness assessment and goal setting", "Alex Rodriguez", "2024-08-22"),
        follow_up("4", "1", "Sarah Johnson", FollowUpKind::Payment, Priority::Medium, "2024-08-25", FollowUpStatus::Completed, "Monthly subscription payment reminder", "Admin", "2024-08-20"),
    ]
}

/// Base constructor for check-in records; lifecycle-specific fields are set
/// by the per-page seed functions below.
#[allow(clippy::too_many_arguments)]
fn checkin(
    id: &str,
    client_name: &str,
    client_mobile: &str,
    group: &str,
    subscription: &str,
    check_in: &str,
    status: CheckInStatus,
) -> CheckIn {
    CheckIn {
        id: id.to_string(),
        client_name: client_name.to_string(),
        client_mobile: client_mobile.to_string(),
        group: group.to_string(),
        subscription: subscription.to_string(),
        check_in: check_in.to_string(),
        status,
        next_check_in: None,
        related_programs: None,
        program_report: None,
        submitted_at: None,
        note: None,
        label: None,
        automatic_cycle: false,
        priority: None,
        scheduled_for: None,
        send_at: None,
        assigned_by: None,
        team_note: None,
    }
}

fn submitted(base: CheckIn, submitted_at: &str, note: &str, label: &str, report: &str) -> CheckIn {
    CheckIn {
        submitted_at: Some(submitted_at.to_string()),
        note: Some(note.to_string()),
        label: Some(label.to_string()),
        program_report: Some(report.to_string()),
        ..base
    }
}

fn checkins() -> Vec<CheckIn> {
    let mut first = submitted(
        checkin("1", "Sarah Johnson", "+1 (555) 123-4567", "Weight Loss", "Premium", "Weekly Progress", CheckInStatus::Submitted),
        "2024-08-25T10:30:00Z",
        "Feeling great, lost 2kg this week",
        "Positive",
        "On track",
    );
    first.next_check_in = Some("2024-08-30".to_string());
    first.related_programs = Some("Diet Plan, Workout".to_string());
    first.automatic_cycle = true;

    let mut second = submitted(
        checkin("2", "Mike Chen", "+1 (555) 234-5678", "Muscle Gain", "Standard", "Monthly Assessment", CheckInStatus::Submitted),
        "2024-08-24T15:45:00Z",
        "Missed 3 workouts due to work",
        "Needs Attention",
        "Behind schedule",
    );
    second.next_check_in = Some("2024-09-25".to_string());
    second.related_programs = Some("Strength Training".to_string());
    second.automatic_cycle = true;

    let mut third = checkin("3", "Emily Davis", "+1 (555) 345-6789", "Nutrition", "Basic", "Diet Review", CheckInStatus::Pending);
    third.next_check_in = Some("2024-08-28".to_string());
    third.related_programs = Some("Meal Plan".to_string());

    let mut fourth = checkin("4", "Alex Thompson", "+1 (555) 456-7890", "Fitness", "Premium", "Bi-weekly Check", CheckInStatus::Overdue);
    fourth.next_check_in = Some("2024-08-20".to_string());
    fourth.related_programs = Some("Cardio, Strength".to_string());
    fourth.automatic_cycle = true;

    let mut fifth = submitted(
        checkin("5", "Jessica Wilson", "+1 (555) 567-8901", "Rehabilitation", "Standard", "Injury Progress", CheckInStatus::Submitted),
        "2024-08-21T11:00:00Z",
        "Pain reduced significantly",
        "Recovery",
        "Recovery on track",
    );
    fifth.next_check_in = Some("2024-08-29".to_string());
    fifth.related_programs = Some("Physical Therapy".to_string());

    let mut sixth = checkin("6", "David Wilson", "+1 (555) 456-7891", "Fitness", "Basic", "Weekly Progress", CheckInStatus::Pending);
    sixth.next_check_in = Some("2024-08-31".to_string());
    sixth.related_programs = Some("Cardio Program".to_string());
    sixth.automatic_cycle = true;

    vec![first, second, third, fourth, fifth, sixth]
}

fn quick_view_checkins() -> Vec<CheckIn> {
    let mut rows = checkins();
    rows.truncate(4);
    for (row, priority) in rows.iter_mut().zip([
        Priority::High,
        Priority::Medium,
        Priority::High,
        Priority::Low,
    ]) {
        row.priority = Some(priority);
    }
    rows
}

fn submitted_checkins() -> Vec<CheckIn> {
    let mut third = submitted(
        checkin("3", "Emily Davis", "+1 (555) 345-6789", "Nutrition", "Basic", "Diet Review", CheckInStatus::Submitted),
        "2024-08-23T09:15:00Z",
        "Following diet perfectly",
        "Excellent",
        "Excellent progress",
    );
    third.next_check_in = Some("2024-08-28".to_string());
    third.related_programs = Some("Meal Plan".to_string());

    let mut fourth = submitted(
        checkin("4", "Alex Thompson", "+1 (555) 456-7890", "Fitness", "Premium", "Bi-weekly Check", CheckInStatus::Submitted),
        "2024-08-22T14:20:00Z",
        "Increased stamina noticed",
        "Good",
        "Good progress",
    );
    fourth.next_check_in = Some("2024-09-08".to_string());
    fourth.related_programs = Some("Cardio, Strength".to_string());
    fourth.automatic_cycle = true;

    let mut rows = checkins();
    rows.retain(|c| c.status == CheckInStatus::Submitted);
    rows.insert(2, third);
    rows.insert(3, fourth);
    for (i, row) in rows.iter_mut().enumerate() {
        row.id = (i + 1).to_string();
    }
    rows
}

fn upcoming(base: CheckIn, scheduled_for: &str, assigned_by: &str, team_note: &str) -> CheckIn {
    CheckIn {
        status: CheckInStatus::Scheduled,
        scheduled_for: Some(scheduled_for.to_string()),
        assigned_by: Some(assigned_by.to_string()),
        team_note: Some(team_note.to_string()),
        ..base
    }
}

fn upcoming_checkins() -> Vec<CheckIn> {
    vec![
        upcoming(
            checkin("1", "Sarah Johnson", "+1 (555) 123-4567", "Weight Loss", "Premium", "Weekly Progress", CheckInStatus::Scheduled),
            "2024-08-30T10:00:00Z",
            "Mike Chen",
            "Client is doing well, expect positive feedback",
        ),
        upcoming(
            checkin("2", "Mike Chen", "+1 (555) 234-5678", "Muscle Gain", "Standard", "Monthly Assessment", CheckInStatus::Scheduled),
            "2024-08-31T14:00:00Z",
            "Sarah Johnson",
            "Focus on progress tracking",
        ),
        upcoming(
            checkin("3", "Emily Davis", "+1 (555) 345-6789", "Nutrition", "Basic", "Diet Review", CheckInStatus::Scheduled),
            "2024-08-27T09:00:00Z",
            "Jessica Smith",
            "First review after plan change",
        ),
        upcoming(
            checkin("4", "Maria Garcia", "+1 (555) 789-0124", "Muscle Gain", "Premium", "Weekly Progress", CheckInStatus::Scheduled),
            "2024-09-02T08:30:00Z",
            "Alex Rodriguez",
            "Watch for overtraining signs",
        ),
    ]
}

fn unsubmitted(base: CheckIn, send_at: &str, by: &str, team_note: &str) -> CheckIn {
    CheckIn {
        status: CheckInStatus::Sent,
        send_at: Some(send_at.to_string()),
        assigned_by: Some(by.to_string()),
        team_note: Some(team_note.to_string()),
        ..base
    }
}

fn unsubmitted_checkins() -> Vec<CheckIn> {
    vec![
        unsubmitted(
            checkin("1", "Sarah Johnson", "+1 (555) 123-4567", "Weight Loss", "Premium", "Weekly Progress", CheckInStatus::Sent),
            "2024-08-25T10:30:00Z",
            "Mike Chen",
            "Client usually responds quickly",
        ),
        unsubmitted(
            checkin("2", "Mike Chen", "+1 (555) 234-5678", "Muscle Gain", "Standard", "Monthly Assessment", CheckInStatus::Sent),
            "2024-08-24T15:45:00Z",
            "Sarah Johnson",
            "Follow up needed",
        ),
        unsubmitted(
            checkin("3", "Robert Brown", "+1 (555) 678-9013", "Fitness", "Basic", "Bi-weekly Check", CheckInStatus::Sent),
            "2024-08-20T08:00:00Z",
            "Alex Rodriguez",
            "Second reminder already sent",
        ),
        unsubmitted(
            checkin("4", "Amanda White", "+1 (555) 901-2346", "Fitness", "Premium", "Weekly Progress", CheckInStatus::Sent),
            "2024-08-26T07:15:00Z",
            "Jessica Smith",
            "New client, first check-in",
        ),
    ]
}

fn reminders() -> Vec<Reminder> {
    let reminder = |id: &str,
                    title: &str,
                    client: &str,
                    client_phone: &str,
                    subscription: &str,
                    group: &str,
                    schedule_type: &str,
                    schedule_date: &str,
                    schedule_time: &str,
                    assigned_to: &str,
                    status: ReminderStatus| Reminder {
        id: id.to_string(),
        reminder: title.to_string(),
        client: client.to_string(),
        client_phone: client_phone.to_string(),
        subscription: subscription.to_string(),
        group: group.to_string(),
        schedule_type: schedule_type.to_string(),
        schedule_date: schedule_date.to_string(),
        schedule_time: schedule_time.to_string(),
        assigned_to: assigned_to.to_string(),
        status,
    };
    vec![
        reminder("1", "Weekly Progress Check", "Sarah Johnson", "+1 (555) 123-4567", "Premium", "Weight Loss", "Weekly", "2024-08-30T10:00:00Z", "10:00 AM", "Mike Chen", ReminderStatus::Active),
        reminder("2", "Monthly Assessment", "Mike Chen", "+1 (555) 234-5678", "Standard", "Muscle Gain", "Monthly", "2024-09-01T14:00:00Z", "2:00 PM", "Sarah Johnson", ReminderStatus::Active),
        reminder("3", "Meal Plan Review", "Emily Davis", "+1 (555) 345-6789", "Basic", "Nutrition", "Bi-weekly", "2024-08-28T09:00:00Z", "9:00 AM", "Jessica Smith", ReminderStatus::Paused),
        reminder("4", "Payment Due", "Robert Brown", "+1 (555) 678-9013", "Basic", "Fitness", "Monthly", "2024-08-27T12:00:00Z", "12:00 PM", "Admin", ReminderStatus::Active),
        reminder("5", "Subscription Renewal", "Lisa Anderson", "+1 (555) 567-8902", "Standard", "Group Classes", "One-time", "2024-08-22T16:00:00Z", "4:00 PM", "Admin", ReminderStatus::Completed),
    ]
}

fn reminder_types() -> Vec<ReminderType> {
    let reminder_type = |id: &str,
                         name: &str,
                         description: &str,
                         category: ReminderCategory,
                         color: &str,
                         icon: &str,
                         is_active: bool,
                         created_at: &str,
                         usage_count: u64| ReminderType {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category,
        color: color.to_string(),
        icon: icon.to_string(),
        is_active,
        created_at: created_at.to_string(),
        updated_at: "2024-08-20".to_string(),
        usage_count,
    };
    vec![
        reminder_type("1", "Warning", "General warning notifications for important alerts", ReminderCategory::Warning, "#f59e0b", "⚠️", true, "2024-01-15", 45),
        reminder_type("2", "Success", "Success notifications for completed actions", ReminderCategory::Success, "#10b981", "✅", true, "2024-01-15", 128),
        reminder_type("3", "Info", "Informational notifications for general updates", ReminderCategory::Info, "#3b82f6", "ℹ️", true, "2024-01-15", 89),
        reminder_type("4", "Error", "Error notifications for critical issues", ReminderCategory::Error, "#ef4444", "❌", true, "2024-01-15", 12),
        reminder_type("5", "Time-out", "Timeout notifications for expired sessions or deadlines", ReminderCategory::Timeout, "#8b5cf6", "⏰", true, "2024-02-10", 67),
        reminder_type("6", "Payment Due", "Payment reminder notifications", ReminderCategory::Warning, "#f59e0b", "💰", true, "2024-03-05", 34),
        reminder_type("7", "Appointment Reminder", "Appointment reminder notifications", ReminderCategory::Info, "#3b82f6", "📅", true, "2024-03-15", 156),
        reminder_type("8", "Program Update", "Program update notifications", ReminderCategory::Success, "#10b981", "📈", true, "2024-04-01", 78),
        reminder_type("9", "Check-in Reminder", "Check-in reminder notifications", ReminderCategory::Info, "#3b82f6", "📝", true, "2024-04-10", 203),
        reminder_type("10", "Subscription Expiry", "Subscription expiry warning notifications", ReminderCategory::Warning, "#f59e0b", "⏳", true, "2024-05-01", 23),
        reminder_type("11", "Custom Alert", "Custom alert notifications", ReminderCategory::Custom, "#6b7280", "🔔", false, "2024-06-01", 5),
    ]
}

fn request_base(
    id: &str,
    kind: RequestKind,
    client: &str,
    group: &str,
    subscription: &str,
    reason: &str,
    since: &str,
    mark_as_read: bool,
    status: RequestStatus,
) -> AppRequest {
    AppRequest {
        id: id.to_string(),
        kind,
        client: client.to_string(),
        group: group.to_string(),
        subscription: subscription.to_string(),
        exercise: None,
        workout: None,
        diet: None,
        meal: None,
        recipe: None,
        reason: reason.to_string(),
        since: since.to_string(),
        mark_as_read,
        status,
    }
}

fn workout_requests() -> Vec<AppRequest> {
    let workout = |base: AppRequest, exercise: &str, workout: &str| AppRequest {
        exercise: Some(exercise.to_string()),
        workout: Some(workout.to_string()),
        ..base
    };
    vec![
        workout(
            request_base("1", RequestKind::Workout, "Sarah Johnson", "Weight Loss", "Premium", "Lower back pain, need alternative exercise", "2024-08-25T10:30:00Z", false, RequestStatus::Pending),
            "Deadlift",
            "Upper Body Strength",
        ),
        workout(
            request_base("2", RequestKind::Workout, "Mike Chen", "Muscle Gain", "Standard", "Knee discomfort during deep squats", "2024-08-24T16:10:00Z", true, RequestStatus::Approved),
            "Squats",
            "Leg Day Foundation",
        ),
        workout(
            request_base("3", RequestKind::Workout, "Maria Garcia", "Muscle Gain", "Premium", "Gym has no cable machine, need substitute", "2024-08-24T09:45:00Z", false, RequestStatus::Pending),
            "Cable Row",
            "Back and Biceps",
        ),
        workout(
            request_base("4", RequestKind::Workout, "David Wilson", "Fitness", "Basic", "Wants to add more cardio volume", "2024-08-22T18:05:00Z", true, RequestStatus::Rejected),
            "Treadmill Intervals",
            "Cardio Program",
        ),
    ]
}

fn diet_requests() -> Vec<AppRequest> {
    let diet = |base: AppRequest, diet_name: &str, meal: &str, recipe: &str| AppRequest {
        diet: Some(diet_name.to_string()),
        meal: Some(meal.to_string()),
        recipe: Some(recipe.to_string()),
        ..base
    };
    vec![
        diet(
            request_base("1", RequestKind::Diet, "Sarah Johnson", "Weight Loss", "Premium", "Allergic to berries, need alternative", "2024-08-25T10:30:00Z", false, RequestStatus::Pending),
            "Weight Loss Plan",
            "Breakfast",
            "Oatmeal with Berries",
        ),
        diet(
            request_base("2", RequestKind::Diet, "Emily Davis", "Nutrition", "Basic", "Does not like fish, requesting poultry swap", "2024-08-24T13:20:00Z", false, RequestStatus::Pending),
            "Balanced Nutrition",
            "Dinner",
            "Grilled Salmon",
        ),
        diet(
            request_base("3", RequestKind::Diet, "Mike Chen", "Muscle Gain", "Standard", "Needs higher protein lunch option", "2024-08-23T11:55:00Z", true, RequestStatus::Approved),
            "Muscle Gain Plan",
            "Lunch",
            "Chicken Rice Bowl",
        ),
        diet(
            request_base("4", RequestKind::Diet, "Amanda White", "Fitness", "Premium", "Lactose intolerant, yogurt replacement needed", "2024-08-21T08:40:00Z", true, RequestStatus::Rejected),
            "HIIT Fuel Plan",
            "Snack",
            "Greek Yogurt Parfait",
        ),
    ]
}

fn lead_responses() -> Vec<LeadResponse> {
    let response = |id: &str,
                    text: &str,
                    created_by: &str,
                    created_at: &str,
                    lead_name: &str,
                    lead_email: &str,
                    lead_phone: &str,
                    form_type: &str,
                    status: LeadStatus| LeadResponse {
        id: id.to_string(),
        response: text.to_string(),
        created_by: created_by.to_string(),
        created_at: created_at.to_string(),
        lead_name: lead_name.to_string(),
        lead_email: lead_email.to_string(),
        lead_phone: lead_phone.to_string(),
        form_type: form_type.to_string(),
        status,
    };
    vec![
        response("1", "I'm interested in weight loss programs", "Website Form", "2024-08-25T10:30:00Z", "John Doe", "john.doe@email.com", "+1 (555) 123-4567", "Contact Form", LeadStatus::New),
        response("2", "Looking for personal training sessions", "Mobile App", "2024-08-24T15:45:00Z", "Jane Smith", "jane.smith@email.com", "+1 (555) 234-5678", "App Signup", LeadStatus::Contacted),
        response("3", "Do you offer nutrition coaching?", "Website Form", "2024-08-24T09:05:00Z", "Peter Novak", "peter.novak@email.com", "+1 (555) 345-6780", "Contact Form", LeadStatus::New),
        response("4", "Interested in group classes for two", "Landing Page", "2024-08-22T19:30:00Z", "Olivia Moore", "olivia.moore@email.com", "+1 (555) 456-7892", "Promo Form", LeadStatus::Qualified),
        response("5", "Ready to start, please send pricing", "Mobile App", "2024-08-20T12:00:00Z", "Ahmed Hassan", "ahmed.hassan@email.com", "+1 (555) 567-8903", "App Signup", LeadStatus::Converted),
    ]
}

fn referrers() -> Vec<Referrer> {
    let referrer = |id: &str,
                    code: &str,
                    created_by: &str,
                    created_at: &str,
                    usage_count: u64,
                    total_leads: u64,
                    conversion_rate: f64,
                    status: ReferrerStatus,
                    description: &str| Referrer {
        id: id.to_string(),
        referrer: code.to_string(),
        created_by: created_by.to_string(),
        created_at: created_at.to_string(),
        usage_count,
        total_leads,
        conversion_rate,
        status,
        description: description.to_string(),
    };
    vec![
        referrer("1", "FITNESS2024", "Admin", "2024-08-25T10:30:00Z", 15, 23, 65.2, ReferrerStatus::Active, "General fitness referral code"),
        referrer("2", "WEIGHTLOSS50", "Sarah Johnson", "2024-08-20T09:00:00Z", 8, 12, 58.3, ReferrerStatus::Active, "Weight loss campaign discount"),
        referrer("3", "SUMMERFIT", "Admin", "2024-06-01T08:00:00Z", 42, 61, 49.2, ReferrerStatus::Inactive, "Summer campaign, ended in July"),
        referrer("4", "FRIENDPASS", "Jessica Smith", "2024-07-15T14:30:00Z", 11, 19, 73.7, ReferrerStatus::Active, "Bring-a-friend referral pass"),
    ]
}

fn notifications() -> Vec<Notification> {
    let notification = |id: &str,
                        title: &str,
                        message: &str,
                        kind: NotificationKind,
                        is_read: bool,
                        created_at: &str,
                        action_url: Option<&str>,
                        priority: Priority| Notification {
        id: id.to_string(),
        title: title.to_string(),
        message: message.to_string(),
        kind,
        is_read,
        created_at: created_at.to_string(),
        action_url: action_url.map(str::to_string),
        priority,
    };
    vec![
        notification("1", "New Client Appointment", "Sarah Johnson has scheduled a new appointment for tomorrow at 10:00 AM", NotificationKind::Info, false, "2024-08-26T08:30:00Z", Some("/calendar/appointments"), Priority::Medium),
        notification("2", "Payment Received", "Payment of $150 received from Mike Chen for monthly subscription", NotificationKind::Success, false, "2024-08-26T07:15:00Z", Some("/finance/invoices"), Priority::Low),
        notification("3", "System Maintenance", "Scheduled maintenance will occur tonight from 2:00 AM to 4:00 AM", NotificationKind::Warning, true, "2024-08-25T16:00:00Z", None, Priority::Medium),
        notification("4", "Client Check-in Overdue", "Emma Davis has not completed her weekly check-in (3 days overdue)", NotificationKind::Error, false, "2024-08-25T14:30:00Z", Some("/checkins"), Priority::High),
        notification("5", "New Lead Assignment", "New lead Jennifer Wilson has been assigned to you", NotificationKind::Info, false, "2024-08-25T11:45:00Z", Some("/leads"), Priority::Medium),
        notification("6", "Program Update Available", "New workout program templates are available for your clients", NotificationKind::Success, true, "2024-08-24T09:20:00Z", Some("/workout/plans"), Priority::Low),
        notification("7", "Subscription Expiry Warning", "Your premium subscription will expire in 7 days", NotificationKind::Warning, false, "2024-08-24T08:00:00Z", Some("/settings"), Priority::High),
        notification("8", "Team Meeting Reminder", "Weekly team meeting starts in 30 minutes", NotificationKind::Info, false, "2024-08-26T09:30:00Z", Some("/calendar/appointments"), Priority::Medium),
    ]
}

fn dashboard_metrics() -> DashboardMetrics {
    DashboardMetrics {
        subscription: SubscriptionStatus {
            is_expiring: true,
            days_left: 3,
            hours_left: 20,
            remaining_percentage: 9.0,
        },
        // Recomputed from the client store by `DataStore::metrics`.
        client_breakdown: ClientBreakdown::default(),
        business_growth: BusinessGrowth {
            daily_new_clients: CountShare::default(),
            daily_renewals: CountShare::default(),
        },
        plan_status: PlanStatus {
            diet: PlanProgress { current: 0, total: 46 },
            resistance: PlanProgress { current: 0, total: 44 },
            fitness: PlanProgress { current: 0, total: 0 },
            mobility: PlanProgress { current: 0, total: 6 },
        },
        active_clients: 0,
        active_team_members: 0,
        total_clients: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique_ids<R: crate::view::Record>(records: &[R]) {
        let ids: HashSet<&str> = records.iter().map(|r| r.id()).collect();
        assert_eq!(ids.len(), records.len());
    }

    #[test]
    fn test_identifiers_unique_within_each_store() {
        let store = store();
        assert_unique_ids(store.clients());
        assert_unique_ids(store.appointments());
        assert_unique_ids(store.leads());
        assert_unique_ids(store.follow_ups());
        assert_unique_ids(store.checkins());
        assert_unique_ids(store.quick_view_checkins());
        assert_unique_ids(store.submitted_checkins());
        assert_unique_ids(store.upcoming_checkins());
        assert_unique_ids(store.unsubmitted_checkins());
        assert_unique_ids(store.reminders());
        assert_unique_ids(store.reminder_types());
        assert_unique_ids(store.workout_requests());
        assert_unique_ids(store.diet_requests());
        assert_unique_ids(store.lead_responses());
        assert_unique_ids(store.referrers());
        assert_unique_ids(store.notifications());
    }

    #[test]
    fn test_submitted_store_only_holds_submitted() {
        assert!(store()
            .submitted_checkins()
            .iter()
            .all(|c| c.status == CheckInStatus::Submitted));
    }

    #[test]
    fn test_metrics_breakdown_follows_client_store() {
        let store = store();
        let metrics = store.metrics();
        assert_eq!(metrics.total_clients as usize, store.clients().len());
        let summed = metrics.client_breakdown.active.count
            + metrics.client_breakdown.on_hold.count
            + metrics.client_breakdown.prestart.count
            + metrics.client_breakdown.expired.count
            + metrics.client_breakdown.refunded.count
            + metrics.client_breakdown.no_subscription.count;
        // Pending/inactive clients fall outside the six dashboard buckets.
        assert!(summed <= metrics.total_clients);
    }

    #[test]
    fn test_timestamps_parse_as_dates() {
        use crate::view::filter::parse_record_date;
        let store = store();
        for checkin in store.upcoming_checkins() {
            let scheduled = checkin.scheduled_for.as_deref().unwrap();
            assert!(parse_record_date(scheduled).is_some(), "{scheduled}");
        }
        for appointment in store.appointments() {
            assert!(parse_record_date(&appointment.date).is_some());
        }
    }
}
