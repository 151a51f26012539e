use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::FileList;
use yew::prelude::*;

// Debounce function to limit button events
pub fn debounce<F>(duration: u32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));

    Callback::from(move |_| {
        let mut timeout_ref = timeout.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        *timeout_ref = Some(Timeout::new(duration, move || {
            inner_callback();
        }));
    })
}

/// First selected file, unfiltered; type and size checks happen later.
pub fn first_file(file_list: &FileList) -> Option<GlooFile> {
    file_list.item(0).map(GlooFile::from)
}
