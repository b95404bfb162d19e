impl<IN> ReaderApp<IN>
where
    IN: InputProvider,
{
    /// Apply one command. Returns whether any observable state changed.
    pub fn dispatch(&mut self, command: Command, now_ms: u64) -> bool {
        match command {
            Command::Play => self.play(now_ms),
            Command::Pause => self.pause(now_ms),
            Command::Toggle => self.toggle(now_ms),
            Command::Restart => self.restart(now_ms),
            Command::Skip(words) => self.skip(words),
            Command::AdjustRate(delta) => self.adjust_rate(delta, now_ms),
            Command::SetChunkSize(words) => self.set_chunk_size(words, now_ms),
            Command::SetStartPoint => self.set_start_point(),
            Command::SeekTo(pct) => self.seek_to(pct),
        }
    }

    pub fn play(&mut self, now_ms: u64) -> bool {
        if self.content.is_empty() {
            debug!("cmd: play ignored, no content");
            return false;
        }

        let mut changed = false;
        if self.current_index >= self.last_index() && self.current_index != self.start_index {
            self.current_index = self.start_index;
            changed = true;
        }
        if !self.playing {
            self.playing = true;
            changed = true;
        }

        self.sync_clock(now_ms);
        self.mark_changed(changed)
    }

    pub fn pause(&mut self, now_ms: u64) -> bool {
        let changed = self.playing;
        self.playing = false;
        self.sync_clock(now_ms);
        self.mark_changed(changed)
    }

    pub fn toggle(&mut self, now_ms: u64) -> bool {
        if self.playing {
            self.pause(now_ms)
        } else {
            self.play(now_ms)
        }
    }

    /// Jump back to the start point and stop.
    pub fn restart(&mut self, now_ms: u64) -> bool {
        let changed = self.playing || self.current_index != self.start_index;
        self.current_index = self.start_index;
        self.playing = false;
        self.sync_clock(now_ms);
        self.mark_changed(changed)
    }

    pub fn skip(&mut self, words: i32) -> bool {
        let last = i64::try_from(self.last_index()).unwrap_or(i64::MAX);
        let current = i64::try_from(self.current_index).unwrap_or(i64::MAX);
        let target = current.saturating_add(i64::from(words)).clamp(0, last);
        // `target` lies in `0..=last_index`, so it fits back into `usize`.
        let target = usize::try_from(target).unwrap_or(self.last_index());

        let changed = target != self.current_index;
        self.current_index = target;
        self.mark_changed(changed)
    }

    pub fn adjust_rate(&mut self, delta: i32, now_ms: u64) -> bool {
        let next = i32::from(self.config.wpm)
            .saturating_add(delta)
            .clamp(i32::from(self.config.min_wpm), i32::from(self.config.max_wpm));
        let next = u16::try_from(next).unwrap_or(self.config.max_wpm);

        if next == self.config.wpm {
            return false;
        }

        debug!("cmd: wpm {} -> {}", self.config.wpm, next);
        self.config.wpm = next;
        self.sync_clock(now_ms);
        self.mark_changed(true)
    }

    pub fn set_chunk_size(&mut self, words: u8, now_ms: u64) -> bool {
        let next = ChunkSize::clamped(words);
        if next == self.chunk_size {
            return false;
        }

        debug!("cmd: chunk size {} -> {}", self.chunk_size.get(), next.get());
        self.chunk_size = next;
        self.sync_clock(now_ms);
        self.mark_changed(true)
    }

    /// Remember the current word as the resume point.
    pub fn set_start_point(&mut self) -> bool {
        let changed = self.start_index != self.current_index;
        self.start_index = self.current_index;
        self.mark_changed(changed)
    }

    /// Move to `pct` percent of the text without touching play state.
    pub fn seek_to(&mut self, pct: f32) -> bool {
        if self.content.is_empty() {
            return false;
        }

        let pct = if pct.is_nan() {
            0.0
        } else {
            f64::from(pct.clamp(0.0, 100.0))
        };
        let total = self.content.tokens().len();
        // Float-to-int `as` truncates toward zero, which is floor for non-negative values.
        let target = ((pct / 100.0) * total as f64) as usize;
        let target = target.min(self.last_index());

        let changed = target != self.current_index;
        self.current_index = target;
        self.mark_changed(changed)
    }

    /// Replace the loaded text. Position and start point reset; rate and chunk size persist.
    pub fn load_content(
        &mut self,
        title: &str,
        source: &str,
        text: &str,
        now_ms: u64,
    ) -> Result<(), LoadError> {
        self.content = Content::new(title, source, text);
        self.current_index = 0;
        self.start_index = 0;
        self.last_error = None;
        self.pending_redraw = true;

        if self.content.is_empty() {
            warn!("content: '{}' has no words; playback disabled", title);
            self.playing = false;
            self.last_error = Some(LoadError::EmptyContent);
            self.sync_clock(now_ms);
            return Err(LoadError::EmptyContent);
        }

        info!(
            "content: loaded title={:?} source={:?} words={}",
            title,
            source,
            self.content.tokens().len()
        );
        self.sync_clock(now_ms);
        Ok(())
    }

    fn mark_changed(&mut self, changed: bool) -> bool {
        if changed {
            self.pending_redraw = true;
        }
        changed
    }

    /// Stop playback and release the clock.
    pub fn shutdown(&mut self) {
        self.playing = false;
        self.cancel_clock("shutdown");
    }
}
