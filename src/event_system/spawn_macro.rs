/// Queues one or more spawn events; they are sent when the commands are applied.
#[macro_export]
macro_rules! spawn {
    ($commands:expr, $($event:expr),+ $(,)?) => {
        $(
            $commands.queue(move |w: &mut bevy::prelude::World| {
                w.send_event($event);
            });
        )+
    };
}
