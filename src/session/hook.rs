use std::rc::Rc;

use yew::prelude::*;

use super::provider::SessionHandle;
use super::state::SessionState;

/// Current session state; re-renders the caller on every publish.
///
/// Outside a `ContextProvider<SessionHandle>` this is the signed-out
/// default.
#[hook]
pub fn use_session() -> Rc<SessionState> {
    let handle = use_context::<SessionHandle>();
    let state = {
        let handle = handle.clone();
        use_state(move || handle.map(|h| h.session().current()).unwrap_or_default())
    };

    {
        let state = state.clone();
        use_effect_with(handle, move |handle| {
            let subscription = handle.as_ref().map(|h| {
                let cell = h.session();
                // catch anything published between first render and now
                state.set(cell.current());
                cell.subscribe(move |next| state.set(next))
            });
            move || drop(subscription)
        });
    }

    (*state).clone()
}
