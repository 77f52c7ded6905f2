use anyhow::{Result, bail};
use hashbrown::HashSet;
use tunicrando_game::{GameData, PortalIdx};

use super::GenerationError;
use crate::settings::PlandoConnection;

/// Resolves user-forced connections to pairs of catalog portals. Every portal may be named by at
/// most one connection.
pub fn plando_connect(
    game_data: &GameData,
    connections: &[PlandoConnection],
) -> Result<Vec<(PortalIdx, PortalIdx)>> {
    let mut pairs = vec![];
    let mut used: HashSet<PortalIdx> = HashSet::new();
    for cxn in connections {
        let entrance = game_data.portal_idx_by_name.get(&cxn.entrance).copied();
        let exit = game_data.portal_idx_by_name.get(&cxn.exit).copied();
        let (entrance, exit) = match (entrance, exit) {
            (Some(a), Some(b)) => (a, b),
            (None, None) => bail!(GenerationError::UnknownPlandoPortals {
                entrance: cxn.entrance.clone(),
                exit: cxn.exit.clone(),
            }),
            (None, Some(_)) => bail!(GenerationError::UnknownPlandoPortal {
                side: "entrance",
                name: cxn.entrance.clone(),
            }),
            (Some(_), None) => bail!(GenerationError::UnknownPlandoPortal {
                side: "exit",
                name: cxn.exit.clone(),
            }),
        };
        for idx in [entrance, exit] {
            if !used.insert(idx) {
                bail!(GenerationError::PlandoPortalReused {
                    name: game_data.portals[idx].name.clone(),
                });
            }
        }
        pairs.push((entrance, exit));
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cxn(entrance: &str, exit: &str) -> PlandoConnection {
        PlandoConnection {
            entrance: entrance.to_string(),
            exit: exit.to_string(),
        }
    }

    #[test]
    fn resolves_names() -> Result<()> {
        let game_data = GameData::load()?;
        let pairs = plando_connect(
            &game_data,
            &[cxn("Stick House Entrance", "Windmill Entrance")],
        )?;
        assert_eq!(pairs.len(), 1);
        let (a, b) = pairs[0];
        assert_eq!(game_data.portals[a].name, "Stick House Entrance");
        assert_eq!(game_data.portals[b].name, "Windmill Entrance");
        Ok(())
    }

    #[test]
    fn unknown_names() -> Result<()> {
        let game_data = GameData::load()?;

        let err = plando_connect(&game_data, &[cxn("Nowhere", "Windmill Entrance")]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<GenerationError>(),
            Some(&GenerationError::UnknownPlandoPortal {
                side: "entrance",
                name: "Nowhere".to_string()
            })
        );
        assert!(err.to_string().contains("entrance portal named Nowhere"));

        let err = plando_connect(&game_data, &[cxn("Stick House Entrance", "Elsewhere")])
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<GenerationError>(),
            Some(&GenerationError::UnknownPlandoPortal {
                side: "exit",
                name: "Elsewhere".to_string()
            })
        );
        assert!(err.to_string().contains("exit portal named Elsewhere"));
        assert!(!err.to_string().contains("Stick House Entrance"));

        let err = plando_connect(&game_data, &[cxn("Nowhere", "Elsewhere")]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Nowhere") && msg.contains("Elsewhere"), "{msg}");
        Ok(())
    }

    #[test]
    fn reused_portal() -> Result<()> {
        let game_data = GameData::load()?;
        let err = plando_connect(
            &game_data,
            &[
                cxn("Stick House Entrance", "Windmill Entrance"),
                cxn("Windmill Entrance", "Well Ladder Entrance"),
            ],
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GenerationError>(),
            Some(GenerationError::PlandoPortalReused { name }) if name == "Windmill Entrance"
        ));

        let err = plando_connect(
            &game_data,
            &[cxn("Stick House Entrance", "Stick House Entrance")],
        )
        .unwrap_err();
        assert!(err.to_string().contains("Stick House Entrance"));
        Ok(())
    }
}
