use crate::gateway::events::EventPublisher;
use crate::gateway::logs::publisher::LogEventPublisher;

pub fn create_publisher() -> Box<dyn EventPublisher> {
    Box::new(LogEventPublisher::new())
}
