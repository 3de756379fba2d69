use async_trait::async_trait;
use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::CirculationError;
use crate::gateway::events::EventPublisher;

// LogEventPublisher emits domain events on the log stream; the notification
// and print collaborators consume them outside the core.
#[derive(Debug, Default)]
pub(crate) struct LogEventPublisher;

impl LogEventPublisher {
    pub(crate) fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl EventPublisher for LogEventPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), CirculationError> {
        info!(event_id = event.event_id.as_str(), name = event.name.as_str(),
            key = event.key.as_str(), "published {:?} event", event.kind);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::events::DomainEvent;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::logs::publisher::LogEventPublisher;

    #[tokio::test]
    async fn test_should_publish_event() {
        let publisher = LogEventPublisher::new();
        let event = DomainEvent::added(
            "loan_created", "loans", "loan1", &"payload".to_string()).expect("build event");
        publisher.publish(&event).await.expect("should publish");
    }
}
