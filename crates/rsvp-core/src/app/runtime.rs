impl<IN> ReaderApp<IN>
where
    IN: InputProvider,
{
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.process_inputs(now_ms);

        let clock_fired = self.tick_clock(now_ms);

        if clock_fired || self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    /// Milliseconds between clock ticks for the current rate and chunk size.
    pub fn tick_interval_ms(&self) -> u32 {
        let chunk = u32::from(self.chunk_size.get());
        60_000 * chunk / u32::from(self.config.wpm.max(1))
    }

    /// Deadline of the live clock, if playback is armed.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.clock.map(|arm| arm.next_fire_ms)
    }

    pub fn armed_clock(&self) -> Option<ClockId> {
        self.clock.map(|arm| arm.id)
    }

    fn tick_clock(&mut self, now_ms: u64) -> bool {
        let Some(arm) = self.clock else {
            return false;
        };

        if now_ms < arm.next_fire_ms {
            return false;
        }

        match self.advance_tick() {
            TickStep::Advanced => {
                let interval = u64::from(arm.interval_ms);
                let mut next_fire_ms = arm.next_fire_ms + interval;
                if next_fire_ms <= now_ms {
                    next_fire_ms = now_ms + interval;
                }
                self.clock = Some(ClockArm {
                    next_fire_ms,
                    ..arm
                });
            }
            TickStep::EndOfText => {
                self.playing = false;
                self.cancel_clock("end of text");
            }
        }

        true
    }

    fn advance_tick(&mut self) -> TickStep {
        let chunk = self.chunk_size.words();
        let stop_at = self.content.tokens().len().saturating_sub(chunk);

        if self.content.is_empty() || self.current_index >= stop_at {
            debug!(
                "clock: end of text at word {}/{}",
                self.current_index,
                self.content.tokens().len()
            );
            return TickStep::EndOfText;
        }

        self.current_index += chunk;
        TickStep::Advanced
    }

    /// Bring the clock in line with the playing flag, rate and chunk size.
    ///
    /// Holds at most one arm: any change cancels the old arm before a new one
    /// is created, and an unchanged configuration keeps the running arm.
    fn sync_clock(&mut self, now_ms: u64) {
        if !self.playing {
            self.cancel_clock("paused");
            return;
        }

        if let Some(arm) = self.clock
            && arm.wpm == self.config.wpm
            && arm.chunk_size == self.chunk_size
        {
            return;
        }

        self.cancel_clock("rearm");

        let id = ClockId(self.next_clock_id);
        self.next_clock_id = self.next_clock_id.wrapping_add(1);
        let interval_ms = self.tick_interval_ms();
        self.clock = Some(ClockArm {
            id,
            wpm: self.config.wpm,
            chunk_size: self.chunk_size,
            interval_ms,
            next_fire_ms: now_ms + u64::from(interval_ms),
        });
        debug!(
            "clock: armed id={} interval_ms={} wpm={} chunk={}",
            id.get(),
            interval_ms,
            self.config.wpm,
            self.chunk_size.get()
        );
    }

    fn cancel_clock(&mut self, reason: &str) {
        if let Some(arm) = self.clock.take() {
            debug!("clock: cancelled id={} reason={}", arm.id.get(), reason);
        }
    }
}
