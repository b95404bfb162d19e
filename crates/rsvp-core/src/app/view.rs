impl<IN> ReaderApp<IN>
where
    IN: InputProvider,
{
    pub fn new(content: Content, input: IN, mut config: ReaderConfig) -> Self {
        if config.max_wpm < config.min_wpm {
            core::mem::swap(&mut config.max_wpm, &mut config.min_wpm);
        }
        config.min_wpm = config.min_wpm.max(1);
        config.max_wpm = config.max_wpm.max(config.min_wpm);
        config.wpm = config.wpm.clamp(config.min_wpm, config.max_wpm);

        let last_error = content.is_empty().then_some(LoadError::EmptyContent);

        Self {
            content,
            input,
            keymap: Keymap::from_config(&config),
            chunk_size: config.chunk_size,
            config,
            current_index: 0,
            start_index: 0,
            playing: false,
            clock: None,
            next_clock_id: 0,
            last_error,
            input_error: None,
            pending_redraw: true,
        }
    }

    pub fn input_mut(&mut self) -> &mut IN {
        &mut self.input
    }

    pub fn with_screen<F>(&self, f: F)
    where
        F: FnOnce(Screen<'_>),
    {
        let title_label = header_label(self.content.title());
        let source_label = header_label(self.content.source());
        let title = title_label.as_str();
        let source = source_label.as_str();
        let input_fault = self.input_error.is_some();

        if self.content.is_empty() {
            f(Screen::Empty {
                title,
                source,
                wpm: self.config.wpm,
                chunk_size: self.chunk_size.get(),
                error: self.last_error,
                input_fault,
            });
            return;
        }

        let chunk = self.current_chunk();
        f(Screen::Reading {
            title,
            source,
            chunk: &chunk,
            focal: self.current_focal(),
            playing: self.playing,
            wpm: self.config.wpm,
            speed: SpeedLabel::for_wpm(self.config.wpm),
            time_saved_pct: time_saved_percent(self.config.wpm),
            chunk_size: self.chunk_size.get(),
            word_index: self.current_index,
            word_total: self.content.tokens().len(),
            start_index: self.start_index,
            progress_pct: self.progress_percent(),
            minutes_remaining: self.estimated_minutes_remaining(),
            input_fault,
        });
    }
}
