impl<IN> ReaderApp<IN>
where
    IN: InputProvider,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => {
                    let _ = self.handle_key(event, now_ms);
                }
                Ok(None) => break,
                Err(err) => {
                    if self.input_error.is_none() {
                        warn!("input: provider failed; keys are no longer read");
                        self.pending_redraw = true;
                    }
                    self.input_error = Some(err);
                    break;
                }
            }
        }
    }

    /// Latest input provider failure, kept until taken.
    pub fn input_error(&self) -> Option<&IN::Error> {
        self.input_error.as_ref()
    }

    pub fn take_input_error(&mut self) -> Option<IN::Error> {
        let err = self.input_error.take();
        if err.is_some() {
            self.pending_redraw = true;
        }
        err
    }

    /// Apply a key press through the keymap. Returns whether state changed.
    pub fn handle_key(&mut self, event: KeyEvent, now_ms: u64) -> bool {
        let Some(command) = self.keymap.command_for(event) else {
            if !event.in_text_input {
                debug!("input: unbound key {:?}", event.key);
            }
            return false;
        };

        debug!("input: key {:?} -> {:?}", event.key, command);
        self.dispatch(command, now_ms)
    }
}
