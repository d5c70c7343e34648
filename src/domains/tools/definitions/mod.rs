//! Tool definitions module.
//!
//! One file per Canvas API area. [`all`] lists every tool exactly once and
//! is what the router and the registry are built from.

pub mod analytics;
pub mod assignments;
pub mod calendar;
pub mod content;
pub mod conversations;
pub mod courses;
pub mod discussions;
pub mod modules;
pub mod quizzes;
pub mod submissions;
pub mod users;

use super::registry::ToolEntry;

/// Every tool in the catalog.
pub fn all() -> Vec<ToolEntry> {
    vec![
        // Courses
        ToolEntry::of::<courses::ListCoursesTool>(),
        ToolEntry::of::<courses::GetCourseTool>(),
        ToolEntry::of::<courses::CreateCourseTool>(),
        ToolEntry::of::<courses::UpdateCourseTool>(),
        ToolEntry::of::<courses::GetSyllabusTool>(),
        // Assignments
        ToolEntry::of::<assignments::ListAssignmentsTool>(),
        ToolEntry::of::<assignments::GetAssignmentTool>(),
        ToolEntry::of::<assignments::CreateAssignmentTool>(),
        ToolEntry::of::<assignments::UpdateAssignmentTool>(),
        ToolEntry::of::<assignments::ListAssignmentGroupsTool>(),
        ToolEntry::of::<assignments::ListRubricsTool>(),
        // Submissions
        ToolEntry::of::<submissions::ListSubmissionsTool>(),
        ToolEntry::of::<submissions::GetSubmissionTool>(),
        ToolEntry::of::<submissions::SubmitGradeTool>(),
        ToolEntry::of::<submissions::SubmitAssignmentTool>(),
        // People
        ToolEntry::of::<users::ListStudentsTool>(),
        ToolEntry::of::<users::ListEnrollmentsTool>(),
        ToolEntry::of::<users::EnrollUserTool>(),
        ToolEntry::of::<users::GetUserProfileTool>(),
        ToolEntry::of::<users::GetCourseGradesTool>(),
        // Modules
        ToolEntry::of::<modules::ListModulesTool>(),
        ToolEntry::of::<modules::ListModuleItemsTool>(),
        ToolEntry::of::<modules::MarkModuleItemCompleteTool>(),
        // Discussions
        ToolEntry::of::<discussions::ListDiscussionTopicsTool>(),
        ToolEntry::of::<discussions::GetDiscussionTopicTool>(),
        ToolEntry::of::<discussions::PostToDiscussionTool>(),
        ToolEntry::of::<discussions::ListAnnouncementsTool>(),
        ToolEntry::of::<discussions::CreateAnnouncementTool>(),
        // Quizzes
        ToolEntry::of::<quizzes::ListQuizzesTool>(),
        ToolEntry::of::<quizzes::GetQuizTool>(),
        // Files and pages
        ToolEntry::of::<content::ListFilesTool>(),
        ToolEntry::of::<content::GetFileTool>(),
        ToolEntry::of::<content::ListPagesTool>(),
        ToolEntry::of::<content::GetPageTool>(),
        // Calendar and dashboard
        ToolEntry::of::<calendar::ListCalendarEventsTool>(),
        ToolEntry::of::<calendar::GetUpcomingAssignmentsTool>(),
        ToolEntry::of::<calendar::GetDashboardCardsTool>(),
        // Conversations
        ToolEntry::of::<conversations::ListConversationsTool>(),
        ToolEntry::of::<conversations::CreateConversationTool>(),
        // Analytics and reports
        ToolEntry::of::<analytics::GetCourseActivityTool>(),
        ToolEntry::of::<analytics::GetStudentSummariesTool>(),
        ToolEntry::of::<analytics::GetStudentActivityTool>(),
        ToolEntry::of::<analytics::GetRosterWithActivityTool>(),
        ToolEntry::of::<analytics::GetStudentProgressTool>(),
        ToolEntry::of::<analytics::ListSubmissionsInRangeTool>(),
        ToolEntry::of::<analytics::GetAssignmentStatisticsTool>(),
    ]
}
