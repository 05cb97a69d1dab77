//! `Display` impls for the decoded packet tree. Kept separate from the
//! types themselves.

use std::fmt::{Display, Formatter, Result};

use crate::header::{Header, HeaderExt};
use crate::lsa::{
    AsExternalEntryV2, AsExternalLsaV2, AsExternalLsaV3, InterAreaPrefixLsa, InterAreaRouterLsa,
    IntraAreaPrefixLsa, LinkLsa, Lsa, LsaBody, LsaHeader, NetworkLsaV2, NetworkLsaV3, Prefix,
    RouterLink, RouterLinkV3, RouterLsaV2, RouterLsaV3, RouterTos, SummaryLsaV2, SummaryTos,
};
use crate::message::{Body, DbDescription, Hello, LsAck, LsRequest, LsRequestEntry, LsUpdate, Message};

impl Display for Message<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}\n{}", self.header, self.body)
    }
}

impl Display for Header {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            r#"== OSPF Header ==
 Version: {:?}
 Type: {}
 Length: {}
 Router ID: {}
 Area ID: {}
 Checksum: {:#06x}"#,
            self.version, self.packet_type, self.length, self.router_id, self.area_id, self.checksum,
        )?;
        match self.ext {
            HeaderExt::V2 { auth_type, auth_data } => {
                write!(f, "\n Auth type: {}\n Auth data: {:#018x}", auth_type, auth_data)
            }
            HeaderExt::V3 { instance, .. } => write!(f, "\n Instance: {}", instance),
        }
    }
}

impl Display for Body<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Body::Hello(v) => write!(f, "{}", v),
            Body::DbDescription(v) => write!(f, "{}", v),
            Body::LsRequest(v) => write!(f, "{}", v),
            Body::LsUpdate(v) => write!(f, "{}", v),
            Body::LsAck(v) => write!(f, "{}", v),
        }
    }
}

impl Display for Hello {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            r#"== Hello ==
 Options: {:#x}
 Priority: {}
 Hello interval: {}
 Router dead interval: {}
 DR: {}
 BDR: {}"#,
            self.options,
            self.priority,
            self.hello_interval,
            self.router_dead_interval,
            self.designated_router,
            self.backup_designated_router,
        )?;
        if let Some(mask) = self.network_mask {
            write!(f, "\n Network mask: {}", mask)?;
        }
        if let Some(id) = self.interface_id {
            write!(f, "\n Interface ID: {}", id)?;
        }
        for nei in &self.neighbors {
            write!(f, "\n Neighbor: {}", nei)?;
        }
        Ok(())
    }
}

impl Display for DbDescription {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            r#"== Database Description ==
 Interface MTU: {}
 Options: {:#x}
 Flags: {:#x}
 DD sequence number: {}"#,
            self.interface_mtu, self.options, self.flags, self.seq_number,
        )?;
        for header in &self.lsa_headers {
            write!(f, "\n{}", header)?;
        }
        Ok(())
    }
}

impl Display for LsRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "== Link State Request ==")?;
        for entry in &self.entries {
            write!(f, "\n{}", entry)?;
        }
        Ok(())
    }
}

impl Display for LsRequestEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            " LS Type: {:#x}\n  LS ID: {:#x}\n  Advertising router: {}",
            self.ls_type, self.link_state_id, self.adv_router
        )
    }
}

impl Display for LsUpdate<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "== Link State Update ==\n Num advertisements: {}", self.num_lsas)?;
        for lsa in &self.lsas {
            write!(f, "\n{}", lsa)?;
        }
        Ok(())
    }
}

impl Display for LsAck {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "== Link State Acknowledgment ==")?;
        for header in &self.lsa_headers {
            write!(f, "\n{}", header)?;
        }
        Ok(())
    }
}

impl Display for LsaHeader {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            r#" LS age: {}
  LS Type: {:#x}
  LS ID: {:#x}
  Advertising router: {}
  LS seq num: {:#x}
  Checksum: {:#06x}
  Length: {}"#,
            self.age, self.ls_type, self.link_state_id, self.adv_router, self.seq_number, self.checksum, self.length,
        )
    }
}

impl Display for Lsa<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}\n{}", self.header, self.body)
    }
}

impl Display for LsaBody<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            LsaBody::RouterV2(v) => write!(f, "{}", v),
            LsaBody::NetworkV2(v) => write!(f, "{}", v),
            LsaBody::SummaryV2(v) => write!(f, "{}", v),
            LsaBody::AsExternalV2(v) => write!(f, "{}", v),
            LsaBody::RouterV3(v) => write!(f, "{}", v),
            LsaBody::NetworkV3(v) => write!(f, "{}", v),
            LsaBody::InterAreaPrefix(v) => write!(f, "{}", v),
            LsaBody::InterAreaRouter(v) => write!(f, "{}", v),
            LsaBody::AsExternalV3(v) => write!(f, "{}", v),
            LsaBody::Link(v) => write!(f, "{}", v),
            LsaBody::IntraAreaPrefix(v) => write!(f, "{}", v),
            LsaBody::Unknown(bytes) => write!(f, "  Unknown LSA body ({} bytes)", bytes.len()),
        }
    }
}

impl Display for RouterLsaV2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "== Router LSA ==\n  Flags: {:#x}\n  Num links: {}", self.flags, self.links.len())?;
        for link in &self.links {
            write!(f, "\n{}", link)?;
        }
        Ok(())
    }
}

impl Display for RouterLink {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "  Link ID: {:#x}, Link Data: {:#x}, Type: {}, Metric: {}",
            self.link_id, self.link_data, self.link_type, self.metric
        )?;
        for tos in &self.tos {
            write!(f, "\n{}", tos)?;
        }
        Ok(())
    }
}

impl Display for RouterTos {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "   ToS: {}, metric: {}", self.tos, self.metric)
    }
}

impl Display for NetworkLsaV2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "== Network LSA ==\n  Netmask: {:#010x}", self.network_mask)?;
        for router in &self.attached_routers {
            write!(f, "\n  Attached router: {:#x}", router)?;
        }
        Ok(())
    }
}

impl Display for SummaryLsaV2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "== Summary LSA ==\n  Netmask: {:#010x}\n  Metric: {}",
            self.network_mask, self.metric
        )?;
        for tos in &self.tos {
            write!(f, "\n{}", tos)?;
        }
        Ok(())
    }
}

impl Display for SummaryTos {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "   ToS: {}, metric: {}", self.tos, self.metric)
    }
}

impl Display for AsExternalLsaV2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "== AS External LSA ==")?;
        for entry in &self.entries {
            write!(f, "\n{}", entry)?;
        }
        Ok(())
    }
}

impl Display for AsExternalEntryV2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "  Netmask: {:#010x}, E: {}, Metric: {}, Forwarding: {}, Tag: {:#x}",
            self.network_mask, self.e_bit, self.metric, self.forwarding_address, self.external_route_tag
        )
    }
}

impl Display for RouterLsaV3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "== Router LSA ==\n  Flags: {:#x}\n  Options: {:#08x}\n  Num interfaces: {}",
            self.flags,
            self.options,
            self.links.len()
        )?;
        for link in &self.links {
            write!(f, "\n{}", link)?;
        }
        Ok(())
    }
}

impl Display for RouterLinkV3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "  Type: {}, Metric: {}, Interface ID: {:#x}, Neighbor Interface ID: {:#x}, Neighbor Router ID: {}",
            self.link_type, self.metric, self.interface_id, self.neighbor_interface_id, self.neighbor_router_id
        )
    }
}

impl Display for NetworkLsaV3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "== Network LSA ==\n  Options: {:#08x}", self.options)?;
        for router in &self.attached_routers {
            write!(f, "\n  Attached router: {:#x}", router)?;
        }
        Ok(())
    }
}

impl Display for InterAreaPrefixLsa {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "== Inter-Area-Prefix LSA ==\n  Metric: {}\n  Prefix: {}",
            self.metric, self.address_prefix
        )
    }
}

impl Display for InterAreaRouterLsa {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "== Inter-Area-Router LSA ==\n  Options: {:#08x}\n  Metric: {}\n  Destination: {}",
            self.options, self.metric, self.destination_router_id
        )
    }
}

impl Display for AsExternalLsaV3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "== AS External LSA ==\n  E: {}, F: {}, T: {}\n  Metric: {}\n  Prefix: {}",
            self.e_bit, self.f_bit, self.t_bit, self.metric, self.address_prefix
        )?;
        if let Some(addr) = self.forwarding_address {
            write!(f, "\n  Forwarding: {}", addr)?;
        }
        if let Some(tag) = self.external_route_tag {
            write!(f, "\n  Tag: {:#x}", tag)?;
        }
        Ok(())
    }
}

impl Display for LinkLsa {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "== Link LSA ==\n  Priority: {}\n  Options: {:#08x}\n  Link-local: {}",
            self.router_priority, self.options, self.link_local_address
        )?;
        for prefix in &self.prefixes {
            write!(f, "\n{}", prefix)?;
        }
        Ok(())
    }
}

impl Display for IntraAreaPrefixLsa {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "== Intra-Area-Prefix LSA ==\n  Referenced type: {:#x}, ID: {:#x}, router: {}",
            self.ref_ls_type, self.ref_link_state_id, self.ref_adv_router
        )?;
        for prefix in &self.prefixes {
            write!(f, "\n{}", prefix)?;
        }
        Ok(())
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "  Prefix: {}", self.address_prefix)?;
        if let Some(metric) = self.metric {
            write!(f, ", metric: {}", metric)?;
        }
        Ok(())
    }
}
