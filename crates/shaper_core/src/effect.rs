use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Shorten {
        request_id: crate::RequestId,
        url: String,
    },
    WriteClipboard {
        copy_id: crate::CopyId,
        text: String,
    },
    ScheduleAckReset {
        copy_id: crate::CopyId,
        after: Duration,
    },
    CancelAckReset,
}
