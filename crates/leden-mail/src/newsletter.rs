use std::fs;
use std::path::Path;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use leden_data::Member;

/// Subject and body as entered by the operator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Newsletter {
    pub subject: String,
    pub body: String,
}

/// The PDF to attach, held in memory so every recipient gets the
/// same bytes without a shared temp file.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub filename: String,
    pub content: Vec<u8>,
}

impl Attachment {
    /// Read the attachment into memory. Only the extension is
    /// checked; the content is taken as-is.
    pub fn from_pdf_path(path: &Path) -> Result<Self> {
        let is_pdf = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if !is_pdf {
            return Err(anyhow!("not a PDF file: {}", path.display()));
        }
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| name.to_string())
            .ok_or_else(|| anyhow!("no usable filename: {}", path.display()))?;
        let content = fs::read(path)?;
        Ok(Attachment { filename, content })
    }
}

/// Something that can deliver the newsletter to one mailbox.
#[async_trait]
pub trait Mailer {
    async fn send(
        &self,
        recipient: &str,
        newsletter: &Newsletter,
        attachment: &Attachment,
    ) -> Result<()>;
}

/// Per-recipient result of a dispatch run.
#[derive(Debug)]
pub struct Outcome {
    pub email: String,
    pub result: Result<()>,
}

#[derive(Debug, Default)]
pub struct DispatchReport {
    pub outcomes: Vec<Outcome>,
}

impl DispatchReport {
    pub fn sent(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.sent()
    }
}

/// Send the newsletter to every member with the e-mail opt-in, in
/// list order. A failed send is recorded in the report and the run
/// continues with the next recipient.
pub async fn dispatch<M>(
    mailer: &M,
    members: &[Member],
    newsletter: &Newsletter,
    attachment: &Attachment,
) -> DispatchReport
where
    M: Mailer + Sync,
{
    let mut report = DispatchReport::default();
    for member in members.iter().filter(|m| m.email_newsletter) {
        let result = mailer.send(&member.email, newsletter, attachment).await;
        report.outcomes.push(Outcome {
            email: member.email.clone(),
            result,
        });
    }
    report
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Records deliveries instead of talking to a mail server.
    #[derive(Default)]
    struct FakeMailer {
        delivered: Mutex<Vec<String>>,
        broken_mailbox: Option<String>,
    }

    #[async_trait]
    impl Mailer for FakeMailer {
        async fn send(
            &self,
            recipient: &str,
            _newsletter: &Newsletter,
            _attachment: &Attachment,
        ) -> Result<()> {
            if self.broken_mailbox.as_deref() == Some(recipient) {
                return Err(anyhow!("mailbox unavailable"));
            }
            self.delivered.lock().unwrap().push(recipient.to_string());
            Ok(())
        }
    }

    fn member(email: &str, opted_in: bool) -> Member {
        Member {
            email: email.to_string(),
            email_newsletter: opted_in,
            ..Default::default()
        }
    }

    fn newsletter() -> Newsletter {
        Newsletter {
            subject: "Nieuwsbrief juni".to_string(),
            body: "Beste leden".to_string(),
        }
    }

    fn attachment() -> Attachment {
        Attachment {
            filename: "nieuwsbrief.pdf".to_string(),
            content: b"%PDF-1.4".to_vec(),
        }
    }

    #[tokio::test]
    async fn test_dispatch_sends_to_opted_in_members_in_list_order() {
        let mailer = FakeMailer::default();
        let members = vec![
            member("a@x.com", true),
            member("skip@x.com", false),
            member("b@x.com", true),
        ];

        let report = dispatch(&mailer, &members, &newsletter(), &attachment()).await;

        assert_eq!(report.sent(), 2);
        assert_eq!(report.failed(), 0);
        let delivered = mailer.delivered.lock().unwrap();
        assert_eq!(*delivered, vec!["a@x.com".to_string(), "b@x.com".to_string()]);
    }

    #[tokio::test]
    async fn test_dispatch_continues_after_a_failed_send() {
        let mailer = FakeMailer {
            broken_mailbox: Some("a@x.com".to_string()),
            ..Default::default()
        };
        let members = vec![member("a@x.com", true), member("b@x.com", true)];

        let report = dispatch(&mailer, &members, &newsletter(), &attachment()).await;

        assert_eq!(report.sent(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.outcomes[0].email, "a@x.com");
        assert!(report.outcomes[0].result.is_err());
        assert_eq!(report.outcomes[1].email, "b@x.com");
        assert!(report.outcomes[1].result.is_ok());
    }

    #[tokio::test]
    async fn test_dispatch_without_opted_in_members() {
        let mailer = FakeMailer::default();
        let members = vec![member("a@x.com", false)];

        let report = dispatch(&mailer, &members, &newsletter(), &attachment()).await;

        assert!(report.outcomes.is_empty());
        assert_eq!(report.sent(), 0);
        assert_eq!(report.failed(), 0);
    }

    #[test]
    fn test_attachment_requires_pdf_extension() {
        let path = std::env::temp_dir().join(format!("leden_test_{}.txt", rand::random::<u64>()));
        fs::write(&path, b"geen pdf").unwrap();
        assert!(Attachment::from_pdf_path(&path).is_err());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_attachment_extension_check_ignores_case() {
        let path = std::env::temp_dir().join(format!("leden_test_{}.PDF", rand::random::<u64>()));
        fs::write(&path, b"%PDF-1.4 inhoud").unwrap();
        let attachment = Attachment::from_pdf_path(&path).unwrap();
        assert_eq!(attachment.content, b"%PDF-1.4 inhoud");
        assert!(attachment.filename.ends_with(".PDF"));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_attachment_missing_file_is_an_error() {
        let path = std::env::temp_dir().join(format!("leden_test_{}.pdf", rand::random::<u64>()));
        assert!(Attachment::from_pdf_path(&path).is_err());
    }
}
