impl<IN> ReaderApp<IN>
where
    IN: InputProvider,
{
    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn wpm(&self) -> u16 {
        self.config.wpm
    }

    pub fn chunk_size(&self) -> ChunkSize {
        self.chunk_size
    }

    pub fn last_error(&self) -> Option<LoadError> {
        self.last_error
    }

    fn last_index(&self) -> usize {
        self.content.tokens().last_index()
    }

    /// Tokens shown for the current position; fewer than the chunk size near the end.
    pub fn chunk_words(&self) -> HeaplessVec<&str, MAX_CHUNK_WORDS> {
        let mut words = HeaplessVec::new();
        for token in self
            .content
            .tokens()
            .window(self.current_index, self.chunk_size.words())
        {
            if words.push(token).is_err() {
                break;
            }
        }
        words
    }

    pub fn current_chunk(&self) -> String {
        let mut chunk = String::new();
        for (idx, word) in self.chunk_words().iter().enumerate() {
            if idx > 0 {
                chunk.push(' ');
            }
            chunk.push_str(word);
        }
        chunk
    }

    /// Focal split of the current word; single-word chunks only.
    pub fn current_focal(&self) -> Option<FocalSplit<'_>> {
        if self.chunk_size != ChunkSize::One {
            return None;
        }

        self.content
            .tokens()
            .get(self.current_index)
            .map(focal_split)
    }

    pub fn progress_percent(&self) -> f32 {
        let total = self.content.tokens().len();
        if total == 0 {
            return 0.0;
        }

        ((self.current_index + 1) as f32 / total as f32) * 100.0
    }

    pub fn estimated_minutes_remaining(&self) -> u32 {
        let remaining = self
            .content
            .tokens()
            .len()
            .saturating_sub(self.current_index);
        let minutes = remaining.div_ceil(usize::from(self.config.wpm.max(1)));
        u32::try_from(minutes).unwrap_or(u32::MAX)
    }
}
