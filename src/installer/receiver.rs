use crate::android::intent::{Bundle, Intent};
use crate::android::intent_receiver::IIntentReceiver::IIntentReceiver;

/// One-argument view of a broadcast delivery.
pub trait IntentConsumer: Send + Sync {
    fn on_intent(&self, intent: Intent);
}

/// Implements the full seven-argument receiver contract and forwards only
/// the delivered intent, which is the one piece the install flow reads.
pub struct IntentReceiverAdaptor<T: IntentConsumer> {
    consumer: T,
}

impl<T: IntentConsumer> IntentReceiverAdaptor<T> {
    pub fn new(consumer: T) -> Self {
        Self { consumer }
    }
}

impl<T: IntentConsumer> rsbinder::Interface for IntentReceiverAdaptor<T> {}

#[allow(non_snake_case)]
impl<T: IntentConsumer> IIntentReceiver for IntentReceiverAdaptor<T> {
    fn r#performReceive(
        &self,
        _arg_intent: &Intent,
        _arg_resultCode: i32,
        _arg_data: Option<&str>,
        _arg_extras: Option<&Bundle>,
        _arg_ordered: bool,
        _arg_sticky: bool,
        _arg_sendingUser: i32,
    ) -> rsbinder::status::Result<()> {
        self.consumer.on_intent(_arg_intent.clone());
        Ok(())
    }
}
