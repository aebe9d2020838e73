use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;

use crate::dto::webhook_dto::{DiscordEmbed, DiscordEmbedField, DiscordWebhook};
use crate::error::{Error, Result};
use crate::models::exam_result::ExamResult;

const COLOR_PASSED: u32 = 0x2ECC71;
const COLOR_FAILED: u32 = 0xE74C3C;

/// Summary of a finished attempt handed to the notifier.
#[derive(Debug, Clone, PartialEq)]
pub struct ExamCompletedNotice {
    pub examinee: String,
    pub category: String,
    pub score: usize,
    pub total: usize,
    pub percentage: f64,
    pub threshold: f64,
    pub passed: bool,
    pub timed_out: usize,
}

impl ExamCompletedNotice {
    pub fn from_result(examinee: &str, result: &ExamResult) -> Self {
        Self {
            examinee: examinee.to_string(),
            category: result.category.clone(),
            score: result.score,
            total: result.total,
            percentage: result.percentage,
            threshold: result.threshold,
            passed: result.passed,
            timed_out: result.details.iter().filter(|d| d.timed_out).count(),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResultNotifier: Send + Sync {
    async fn exam_completed(&self, notice: &ExamCompletedNotice) -> Result<()>;
}

/// Posts exam results to a Discord channel webhook.
#[derive(Clone)]
pub struct DiscordNotifier {
    client: Client,
    webhook_url: Option<String>,
}

impl DiscordNotifier {
    pub fn new(webhook_url: Option<String>) -> Self {
        Self {
            client: Client::new(),
            webhook_url,
        }
    }

    pub fn build_payload(notice: &ExamCompletedNotice) -> DiscordWebhook {
        let verdict = if notice.passed { "Passed" } else { "Failed" };
        let mut fields = vec![
            DiscordEmbedField {
                name: "Examinee".to_string(),
                value: notice.examinee.clone(),
                inline: true,
            },
            DiscordEmbedField {
                name: "Category".to_string(),
                value: notice.category.clone(),
                inline: true,
            },
            DiscordEmbedField {
                name: "Score".to_string(),
                value: format!(
                    "{}/{} ({}%)",
                    notice.score, notice.total, notice.percentage
                ),
                inline: true,
            },
            DiscordEmbedField {
                name: "Required".to_string(),
                value: format!("{}%", notice.threshold),
                inline: true,
            },
        ];
        if notice.timed_out > 0 {
            fields.push(DiscordEmbedField {
                name: "Timed out".to_string(),
                value: notice.timed_out.to_string(),
                inline: true,
            });
        }

        DiscordWebhook {
            username: Some("Academy Exams".to_string()),
            content: None,
            embeds: vec![DiscordEmbed {
                title: format!("Exam {}: {}", verdict.to_lowercase(), notice.category),
                description: Some(format!("{} has {} the exam.", notice.examinee, verdict.to_lowercase())),
                color: if notice.passed { COLOR_PASSED } else { COLOR_FAILED },
                fields,
                timestamp: Utc::now(),
            }],
        }
    }
}

#[async_trait]
impl ResultNotifier for DiscordNotifier {
    async fn exam_completed(&self, notice: &ExamCompletedNotice) -> Result<()> {
        let Some(url) = self.webhook_url.as_deref() else {
            tracing::debug!("Discord webhook not configured, skipping notification");
            return Ok(());
        };

        let payload = Self::build_payload(notice);
        let resp = self.client.post(url).json(&payload).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Internal(format!(
                "Discord webhook returned {}: {}",
                status, body
            )));
        }

        tracing::info!(
            examinee = %notice.examinee,
            category = %notice.category,
            passed = notice.passed,
            "Exam result sent to Discord"
        );
        Ok(())
    }
}
