//! 注册通知邮件队列
//!
//! 邮件投递在请求路径之外异步执行：请求只负责把任务塞进队列，
//! 投递失败由 worker 自行重试并记录日志，绝不反过来影响触发它
//! 的请求。

use std::sync::OnceLock;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::config::AppConfig;
use crate::errors::{CourseHubError, Result};

/// 一封待投递的通知邮件
#[derive(Debug, Clone)]
pub struct EmailTask {
    pub to: String,
    pub subject: String,
    pub body: String,
}

static SENDER: OnceLock<mpsc::Sender<EmailTask>> = OnceLock::new();

pub struct Notifier;

impl Notifier {
    /// 启动邮件 worker，进程生命周期内只调用一次
    pub fn spawn() {
        let config = AppConfig::get();
        let (tx, mut rx) = mpsc::channel::<EmailTask>(config.notify.queue_capacity);

        if SENDER.set(tx).is_err() {
            warn!("Mail worker already spawned, ignoring duplicate spawn");
            return;
        }

        let max_retries = config.notify.max_retries;
        let from_address = config.notify.from_address.clone();

        tokio::spawn(async move {
            info!("Mail worker started, sending as {}", from_address);
            while let Some(task) = rx.recv().await {
                deliver_with_retry(&from_address, &task, max_retries).await;
            }
            info!("Mail worker stopped");
        });
    }

    /// 入队一封邮件，队列未初始化或已满视为投递失败
    pub fn enqueue(task: EmailTask) -> Result<()> {
        let sender = SENDER
            .get()
            .ok_or_else(|| CourseHubError::notification("mail worker not started"))?;

        sender
            .try_send(task)
            .map_err(|e| CourseHubError::notification(format!("mail queue rejected task: {e}")))
    }

    /// 注册成功后的欢迎邮件
    pub fn enqueue_welcome_email(username: &str, email: &str) -> Result<()> {
        Self::enqueue(EmailTask {
            to: email.to_string(),
            subject: "Welcome to CourseHub".to_string(),
            body: format!("Hi {username}, your account has been created successfully."),
        })
    }
}

// 至少一次投递：失败重试到上限为止，最终失败只记日志
async fn deliver_with_retry(from_address: &str, task: &EmailTask, max_retries: u32) {
    for attempt in 0..=max_retries {
        match deliver(from_address, task).await {
            Ok(()) => {
                info!("Mail delivered to {} ({})", task.to, task.subject);
                return;
            }
            Err(e) if attempt < max_retries => {
                warn!(
                    "Mail delivery to {} failed (attempt {}/{}): {}",
                    task.to,
                    attempt + 1,
                    max_retries,
                    e
                );
                tokio::time::sleep(backoff_delay(attempt)).await;
            }
            Err(e) => {
                error!(
                    "Mail delivery to {} abandoned after {} attempts: {}",
                    task.to,
                    max_retries + 1,
                    e
                );
            }
        }
    }
}

// 指数退避，指数封顶防止大重试配置下移位溢出
fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_secs(1u64 << attempt.min(16))
}

// 实际投递出口。当前部署没有外发通道，投递即结构化日志落盘，
// 由日志采集侧接驳真实邮件网关。
async fn deliver(from_address: &str, task: &EmailTask) -> Result<()> {
    info!(
        from = from_address,
        to = %task.to,
        subject = %task.subject,
        "outbound mail: {}",
        task.body
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enqueue_without_worker_fails() {
        // SENDER 未初始化时入队应报通知错误而非 panic
        if SENDER.get().is_none() {
            let result = Notifier::enqueue(EmailTask {
                to: "someone@example.com".to_string(),
                subject: "test".to_string(),
                body: "test".to_string(),
            });
            assert!(result.is_err());
        }
    }

    #[test]
    fn test_backoff_delay_doubles_then_caps() {
        assert_eq!(backoff_delay(0), Duration::from_secs(1));
        assert_eq!(backoff_delay(3), Duration::from_secs(8));
        assert_eq!(backoff_delay(16), Duration::from_secs(65536));
        // 超大重试配置不会触发移位溢出
        assert_eq!(backoff_delay(64), Duration::from_secs(65536));
    }
}
