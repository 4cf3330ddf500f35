use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use super::*;

#[test]
fn test_concurrent_first_calls_build_once() {
    let built = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&built);
    let factory: TokenizerFactory = Box::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        thread::sleep(Duration::from_millis(20));
        let tokenizer: Arc<dyn Tokenizer> =
            Arc::new(LatticeTokenizer::new(Arc::new(test_dict()), None));
        Ok(tokenizer)
    });
    let romanizer = Romanizer::with_factory(factory);

    let results: Vec<String> = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| romanizer.romanize("東京の空", &[])))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(built.load(Ordering::SeqCst), 1);
    assert!(results.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_concurrent_profile_loading() {
    let (romanizer, _) = test_romanizer();
    let profiles = lyric_languages();
    let routed: Vec<bool> = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| romanizer.route_to_japanese("ｻｸﾗ", &profiles)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(routed.into_iter().all(|r| r));
    assert!(romanizer.profiles_loaded());
}

#[test]
fn test_romanizer_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Romanizer>();
}
