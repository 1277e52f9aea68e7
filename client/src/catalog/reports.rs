//! Moderation reports.

use serde::{Deserialize, Serialize};

use crate::domain::{Report, ReportStatus};

macro_rules! report_selection {
    () => {
        concat!(
            "    id\n",
            "    reported { ...ActorFragment }\n",
            "    reporter { ...ActorFragment }\n",
            "    event {\n",
            "      id\n",
            "      uuid\n",
            "      title\n",
            "      picture { id url }\n",
            "    }\n",
            "    status\n",
            "    content\n"
        )
    };
}

/// Variables of [`Reports`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportsVariables {
    /// Only list reports in this state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReportStatus>,
}

/// Data of [`Reports`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportsData {
    /// Reports visible to the moderator.
    pub reports: Vec<Report>,
}

operation! {
    query
    /// Moderation queue.
    Reports = "Reports" {
        document: concat!(
            "query Reports($status: ReportStatus) {\n",
            "  reports(status: $status) {\n",
            report_selection!(),
            "  }\n",
            "}\n",
            actor_fragment!()
        ),
        variables: ReportsVariables,
        data: ReportsData,
    }
}

/// Variables of [`CreateReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportVariables {
    /// Actor being reported.
    pub reported_id: String,
    /// Reporter's explanation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Event the report is about.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    /// Comments attached as evidence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments_ids: Vec<String>,
    /// Also notify the reported actor's instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward: Option<bool>,
}

/// Identifier of a created report.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedReport {
    /// Opaque identifier.
    pub id: String,
}

/// Data of [`CreateReport`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportData {
    /// The new report.
    pub create_report: CreatedReport,
}

operation! {
    mutation
    /// File a report against an actor, event or comments.
    CreateReport = "CreateReport" {
        document: concat!(
            "mutation CreateReport(\n",
            "  $eventId: ID\n",
            "  $reportedId: ID!\n",
            "  $content: String\n",
            "  $commentsIds: [ID]\n",
            "  $forward: Boolean\n",
            ") {\n",
            "  createReport(\n",
            "    eventId: $eventId\n",
            "    reportedId: $reportedId\n",
            "    content: $content\n",
            "    commentsIds: $commentsIds\n",
            "    forward: $forward\n",
            "  ) {\n",
            "    id\n",
            "  }\n",
            "}\n"
        ),
        variables: CreateReportVariables,
        data: CreateReportData,
    }
}

/// Variables of [`UpdateReportStatus`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReportStatusVariables {
    /// Report to update.
    pub report_id: String,
    /// New moderation status.
    pub status: ReportStatus,
}

/// Data of [`UpdateReportStatus`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReportStatusData {
    /// The report after the update.
    pub update_report_status: Report,
}

operation! {
    mutation
    /// Move a report to another state.
    UpdateReportStatus = "UpdateReportStatus" {
        document: concat!(
            "mutation UpdateReportStatus($reportId: ID!, $status: ReportStatus!) {\n",
            "  updateReportStatus(reportId: $reportId, status: $status) {\n",
            report_selection!(),
            "  }\n",
            "}\n",
            actor_fragment!()
        ),
        variables: UpdateReportStatusVariables,
        data: UpdateReportStatusData,
    }
}
