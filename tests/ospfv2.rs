use hex_literal::hex;
use ospf_packet::header::PacketType;
use ospf_packet::lsa::LsaBody;
use ospf_packet::message::Body;
use ospf_packet::{decode, Version};

#[test]
fn parse_hello() {
    const PACKET: &[u8] = &hex!(
        "
        02 01 00 2c c0 a8 aa 08 00 00 00 01 27 3b 00 00
        00 00 00 00 00 00 00 00 ff ff ff 00 00 0a 02 01
        00 00 00 28 c0 a8 aa 08 00 00 00 00
        "
    );
    let (msg, consumed) = decode(PACKET).unwrap();
    assert_eq!(consumed, PACKET.len());
    assert_eq!(msg.header.version, Version::V2);
    assert_eq!(msg.header.packet_type, PacketType::Hello);
    let Body::Hello(hello) = &msg.body else { panic!("expected Hello") };
    assert_eq!(hello.network_mask, Some("255.255.255.0".parse().unwrap()));
    assert_eq!(hello.hello_interval, 10);
    assert_eq!(hello.router_dead_interval, 40);
    assert_eq!(hello.designated_router, "192.168.170.8".parse::<std::net::Ipv4Addr>().unwrap());
    assert!(hello.neighbors.is_empty());
}

#[test]
fn parse_db_desc() {
    const PACKET: &[u8] = &hex!(
        "
        02 02 00 20 c0 a8 aa 08 00 00 00 01 a0 52 00 00
        00 00 00 00 00 00 00 00 05 dc 02 07 41 77 a9 7e
        "
    );
    let (msg, consumed) = decode(PACKET).unwrap();
    assert_eq!(consumed, PACKET.len());
    let Body::DbDescription(dd) = &msg.body else { panic!("expected DbDescription") };
    assert_eq!(dd.interface_mtu, 1500);
    assert_eq!(dd.options, 0x02);
    assert_eq!(dd.flags, 0x07);
    assert_eq!(dd.seq_number, 0x4177a97e);
    assert!(dd.lsa_headers.is_empty());
}

#[test]
fn parse_db_desc_lsa() {
    const PACKET: &[u8] = &hex!(
        "
        02 02 00 ac c0 a8 aa 03 00 00 00 01 f0 67 00 00
        00 00 00 00 00 00 00 00 05 dc 02 02 41 77 a9 7e
        00 01 02 01 c0 a8 aa 03 c0 a8 aa 03 80 00 00 01
        3a 9c 00 30 00 02 02 05 50 d4 10 00 c0 a8 aa 02
        80 00 00 01 2a 49 00 24 00 02 02 05 94 79 ab 00
        c0 a8 aa 02 80 00 00 01 34 a5 00 24 00 02 02 05
        c0 82 78 00 c0 a8 aa 02 80 00 00 01 d3 19 00 24
        00 02 02 05 c0 a8 00 00 c0 a8 aa 02 80 00 00 01
        37 08 00 24 00 02 02 05 c0 a8 01 00 c0 a8 aa 02
        80 00 00 01 2c 12 00 24 00 02 02 05 c0 a8 ac 00
        c0 a8 aa 02 80 00 00 01 33 41 00 24
        "
    );
    let (msg, consumed) = decode(PACKET).unwrap();
    assert_eq!(consumed, PACKET.len());
    let Body::DbDescription(dd) = &msg.body else { panic!("expected DbDescription") };
    assert_eq!(dd.lsa_headers.len(), 7);
    assert_eq!(dd.lsa_headers[0].ls_type, 1);
    assert_eq!(dd.lsa_headers[1].ls_type, 5);
}

#[test]
fn parse_ls_request() {
    const PACKET: &[u8] = &hex!(
        "
        02 03 00 24 c0 a8 aa 03 00 00 00 01 bd c7 00 00
        00 00 00 00 00 00 00 00 00 00 00 01 c0 a8 aa 08
        c0 a8 aa 08
        "
    );
    let (msg, consumed) = decode(PACKET).unwrap();
    assert_eq!(consumed, PACKET.len());
    let Body::LsRequest(req) = &msg.body else { panic!("expected LsRequest") };
    assert_eq!(req.entries.len(), 1);
    assert_eq!(req.entries[0].ls_type, 1);
    assert_eq!(req.entries[0].adv_router, "192.168.170.8".parse::<std::net::Ipv4Addr>().unwrap());
}

#[test]
fn parse_ls_request_multi() {
    const PACKET: &[u8] = &hex!(
        "
        02 03 00 6c c0 a8 aa 08 00 00 00 01 75 95 00 00
        00 00 00 00 00 00 00 00 00 00 00 01 c0 a8 aa 03
        c0 a8 aa 03 00 00 00 05 50 d4 10 00 c0 a8 aa 02
        00 00 00 05 94 79 ab 00 c0 a8 aa 02 00 00 00 05
        c0 82 78 00 c0 a8 aa 02 00 00 00 05 c0 a8 00 00
        c0 a8 aa 02 00 00 00 05 c0 a8 01 00 c0 a8 aa 02
        00 00 00 05 c0 a8 ac 00 c0 a8 aa 02
        "
    );
    let (msg, consumed) = decode(PACKET).unwrap();
    assert_eq!(consumed, PACKET.len());
    let Body::LsRequest(req) = &msg.body else { panic!("expected LsRequest") };
    assert_eq!(req.entries.len(), 6);
}

#[test]
fn parse_ls_upd() {
    const PACKET: &[u8] = &hex!(
        "
        02 04 00 40 c0 a8 aa 08 00 00 00 01 96 1f 00 00
        00 00 00 00 00 00 00 00 00 00 00 01 03 e2 02 01
        c0 a8 aa 08 c0 a8 aa 08 80 00 0d c3 25 06 00 24
        02 00 00 01 c0 a8 aa 00 ff ff ff 00 03 00 00 0a
        "
    );
    let (msg, consumed) = decode(PACKET).unwrap();
    assert_eq!(consumed, PACKET.len());
    let Body::LsUpdate(upd) = &msg.body else { panic!("expected LsUpdate") };
    assert_eq!(upd.num_lsas, 1);
    assert_eq!(upd.lsas.len(), 1);
    let LsaBody::RouterV2(router) = &upd.lsas[0].body else { panic!("expected RouterV2") };
    assert_eq!(router.links.len(), 1);
}

#[test]
fn parse_ls_upd_multi() {
    const PACKET: &[u8] = &hex!(
        "
        02 04 01 24 c0 a8 aa 03 00 00 00 01 36 6b 00 00
        00 00 00 00 00 00 00 00 00 00 00 07 00 02 02 01
        c0 a8 aa 03 c0 a8 aa 03 80 00 00 01 3a 9c 00 30
        02 00 00 02 c0 a8 aa 00 ff ff ff 00 03 00 00 0a
        c0 a8 aa 00 ff ff ff 00 03 00 00 0a 00 03 02 05
        50 d4 10 00 c0 a8 aa 02 80 00 00 01 2a 49 00 24
        ff ff ff ff 80 00 00 14 00 00 00 00 00 00 00 00
        00 03 02 05 94 79 ab 00 c0 a8 aa 02 80 00 00 01
        34 a5 00 24 ff ff ff 00 80 00 00 14 c0 a8 aa 01
        00 00 00 00 00 03 02 05 c0 82 78 00 c0 a8 aa 02
        80 00 00 01 d3 19 00 24 ff ff ff 00 80 00 00 14
        00 00 00 00 00 00 00 00 00 03 02 05 c0 a8 00 00
        c0 a8 aa 02 80 00 00 01 37 08 00 24 ff ff ff 00
        80 00 00 14 00 00 00 00 00 00 00 00 00 03 02 05
        c0 a8 01 00 c0 a8 aa 02 80 00 00 01 2c 12 00 24
        ff ff ff 00 80 00 00 14 00 00 00 00 00 00 00 00
        00 03 02 05 c0 a8 ac 00 c0 a8 aa 02 80 00 00 01
        33 41 00 24 ff ff ff 00 80 00 00 14 c0 a8 aa 0a
        00 00 00 00
        "
    );
    let (msg, consumed) = decode(PACKET).unwrap();
    assert_eq!(consumed, PACKET.len());
    let Body::LsUpdate(upd) = &msg.body else { panic!("expected LsUpdate") };
    assert_eq!(upd.num_lsas, 7);
    assert_eq!(upd.lsas.len(), 7);
    assert!(matches!(upd.lsas[0].body, LsaBody::RouterV2(_)));
    for lsa in &upd.lsas[1..] {
        assert!(matches!(lsa.body, LsaBody::AsExternalV2(_)));
    }
}

#[test]
fn parse_ls_ack() {
    const PACKET: &[u8] = &hex!(
        "
        02 05 00 2c c0 a8 aa 08 00 00 00 01 02 f2 00 00
        00 00 00 00 00 00 00 00 00 01 02 01 c0 a8 aa 03
        c0 a8 aa 03 80 00 00 02 38 9d 00 30
        "
    );
    let (msg, consumed) = decode(PACKET).unwrap();
    assert_eq!(consumed, PACKET.len());
    let Body::LsAck(ack) = &msg.body else { panic!("expected LsAck") };
    assert_eq!(ack.lsa_headers.len(), 1);
    assert_eq!(ack.lsa_headers[0].ls_type, 1);
}
